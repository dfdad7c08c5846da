// Host-side tests for the localization table.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod i18n {
    include!("../src/core/i18n.rs");
}

use i18n::*;

struct FakeElement {
    key: Option<String>,
    markup: String,
}

impl FakeElement {
    fn keyed(key: &str, markup: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            markup: markup.to_string(),
        }
    }
}

impl TextTarget for FakeElement {
    fn i18n_key(&self) -> Option<String> {
        self.key.clone()
    }

    fn set_markup(&mut self, markup: &str) {
        self.markup = markup.to_string();
    }
}

fn page() -> Vec<FakeElement> {
    TextKey::ALL
        .iter()
        .map(|k| FakeElement::keyed(k.attr(), "placeholder"))
        .collect()
}

#[test]
fn every_keyed_element_gets_exact_locale_text() {
    let catalog = Catalog::builtin();
    for locale in Locale::ALL {
        let mut elements = page();
        let updated = apply(&catalog, locale, elements.iter_mut());
        assert_eq!(updated, TextKey::ALL.len());
        for el in &elements {
            let key = TextKey::from_attr(el.key.as_deref().unwrap()).unwrap();
            assert_eq!(Some(el.markup.as_str()), catalog.lookup(locale, key));
        }
    }
}

#[test]
fn embedded_markup_is_kept_verbatim() {
    let catalog = Catalog::builtin();
    let mut el = [FakeElement::keyed("hero_title", "")];
    apply(&catalog, Locale::En, el.iter_mut());
    assert_eq!(el[0].markup, "LIQUID<br>CHROME");
    apply(&catalog, Locale::Pt, el.iter_mut());
    assert_eq!(el[0].markup, "CROMADO<br>LÍQUIDO");
}

static EN_FULL: Table = &[
    (TextKey::NavSpecs, "SPECS"),
    (TextKey::GalleryTitle, "VISUAL ARCHIVE"),
];
static PT_PARTIAL: Table = &[(TextKey::NavSpecs, "ESPECIFICAÇÕES")];

#[test]
fn missing_key_leaves_previous_content() {
    let catalog = Catalog::from_tables(EN_FULL, PT_PARTIAL);
    let mut elements = vec![
        FakeElement::keyed("nav_specs", ""),
        FakeElement::keyed("gallery_title", ""),
    ];
    apply(&catalog, Locale::En, elements.iter_mut());
    assert_eq!(elements[1].markup, "VISUAL ARCHIVE");

    let updated = apply(&catalog, Locale::Pt, elements.iter_mut());
    assert_eq!(updated, 1);
    assert_eq!(elements[0].markup, "ESPECIFICAÇÕES");
    assert_eq!(elements[1].markup, "VISUAL ARCHIVE");

    // switching again is still a no-op for the missing key
    apply(&catalog, Locale::Pt, elements.iter_mut());
    assert_eq!(elements[1].markup, "VISUAL ARCHIVE");
}

#[test]
fn unknown_and_absent_keys_are_skipped() {
    let catalog = Catalog::builtin();
    let mut elements = vec![
        FakeElement::keyed("not_a_key", "keep me"),
        FakeElement {
            key: None,
            markup: "untouched".into(),
        },
    ];
    assert_eq!(apply(&catalog, Locale::En, elements.iter_mut()), 0);
    assert_eq!(elements[0].markup, "keep me");
    assert_eq!(elements[1].markup, "untouched");
}

#[test]
fn empty_strings_count_as_missing() {
    static PT_EMPTY: Table = &[(TextKey::NavSpecs, "")];
    let catalog = Catalog::from_tables(EN_FULL, PT_EMPTY);
    assert_eq!(catalog.lookup(Locale::Pt, TextKey::NavSpecs), None);
    assert!(catalog.missing_keys(Locale::Pt).contains(&TextKey::NavSpecs));
}

#[test]
fn builtin_tables_cover_every_key() {
    let catalog = Catalog::builtin();
    assert!(catalog.missing_keys(Locale::En).is_empty());
    assert!(catalog.missing_keys(Locale::Pt).is_empty());
}

#[test]
fn attribute_names_round_trip() {
    for key in TextKey::ALL {
        assert_eq!(TextKey::from_attr(key.attr()), Some(key));
    }
    assert_eq!(TextKey::from_attr("NAV_SPECS"), None);
}

#[test]
fn browser_language_selects_locale() {
    assert_eq!(Locale::from_browser_language("pt-BR"), Locale::Pt);
    assert_eq!(Locale::from_browser_language("PT"), Locale::Pt);
    assert_eq!(Locale::from_browser_language("en-US"), Locale::En);
    assert_eq!(Locale::from_browser_language("fr"), Locale::En);
    assert_eq!(Locale::from_browser_language(""), Locale::En);
}

#[test]
fn toggle_indicator_follows_locale() {
    assert_eq!(Locale::En.toggled(), Locale::Pt);
    assert_eq!(Locale::Pt.toggled().indicator(), "EN");
    assert_eq!(Locale::Pt.indicator(), "PT");
    assert_eq!(Locale::Pt.code(), "pt");
}
