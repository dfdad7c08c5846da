use fnv::FnvHashMap;

/// Attribute naming the translation key of a localizable element.
pub const I18N_ATTRIBUTE: &str = "data-i18n";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Pt,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Pt];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }

    /// Text shown on the language toggle.
    pub fn indicator(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Pt => "PT",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Pt,
            Locale::Pt => Locale::En,
        }
    }

    /// Pick the page language from `navigator.language`.
    pub fn from_browser_language(language: &str) -> Self {
        if language.to_lowercase().starts_with("pt") {
            Locale::Pt
        } else {
            Locale::En
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKey {
    NavSpecs,
    NavGallery,
    HeroTitle,
    Finish,
    DragHint,
    Enable3d,
    Disable3d,
    DescTitle,
    DescSubtitle,
    DescText1,
    DescText2,
    TechTitle,
    SpecCase,
    SpecFinish,
    SpecDisplay,
    SpecGlass,
    SpecMov,
    SpecDim,
    SpecWr,
    SpecMat,
    SpecInt,
    SpecYr,
    GalleryTitle,
}

impl TextKey {
    pub const ALL: [TextKey; 23] = [
        TextKey::NavSpecs,
        TextKey::NavGallery,
        TextKey::HeroTitle,
        TextKey::Finish,
        TextKey::DragHint,
        TextKey::Enable3d,
        TextKey::Disable3d,
        TextKey::DescTitle,
        TextKey::DescSubtitle,
        TextKey::DescText1,
        TextKey::DescText2,
        TextKey::TechTitle,
        TextKey::SpecCase,
        TextKey::SpecFinish,
        TextKey::SpecDisplay,
        TextKey::SpecGlass,
        TextKey::SpecMov,
        TextKey::SpecDim,
        TextKey::SpecWr,
        TextKey::SpecMat,
        TextKey::SpecInt,
        TextKey::SpecYr,
        TextKey::GalleryTitle,
    ];

    pub fn attr(self) -> &'static str {
        match self {
            TextKey::NavSpecs => "nav_specs",
            TextKey::NavGallery => "nav_gallery",
            TextKey::HeroTitle => "hero_title",
            TextKey::Finish => "finish",
            TextKey::DragHint => "drag_hint",
            TextKey::Enable3d => "enable_3d",
            TextKey::Disable3d => "disable_3d",
            TextKey::DescTitle => "desc_title",
            TextKey::DescSubtitle => "desc_subtitle",
            TextKey::DescText1 => "desc_text_1",
            TextKey::DescText2 => "desc_text_2",
            TextKey::TechTitle => "tech_title",
            TextKey::SpecCase => "spec_case",
            TextKey::SpecFinish => "spec_finish",
            TextKey::SpecDisplay => "spec_display",
            TextKey::SpecGlass => "spec_glass",
            TextKey::SpecMov => "spec_mov",
            TextKey::SpecDim => "spec_dim",
            TextKey::SpecWr => "spec_wr",
            TextKey::SpecMat => "spec_mat",
            TextKey::SpecInt => "spec_int",
            TextKey::SpecYr => "spec_yr",
            TextKey::GalleryTitle => "gallery_title",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        TextKey::ALL.iter().copied().find(|k| k.attr() == value)
    }
}

pub type Table = &'static [(TextKey, &'static str)];

pub static EN: Table = &[
    (TextKey::NavSpecs, "SPECS"),
    (TextKey::NavGallery, "GALLERY"),
    (TextKey::HeroTitle, "LIQUID<br>CHROME"),
    (TextKey::Finish, "FINISH: POLISHED SILVER"),
    (TextKey::DragHint, "[ DRAG TO ROTATE ]"),
    (TextKey::Enable3d, "ENABLE 3D"),
    (TextKey::Disable3d, "EXIT 3D VIEW"),
    (TextKey::DescTitle, "SCULPTED<br>VELOCITY."),
    (TextKey::DescSubtitle, "THE PHIL FRANK LEGACY / CIRCA 2002"),
    (
        TextKey::DescText1,
        "Executed in brushed stainless steel, the D-Line abandons traditional watch geometry. Its seamless 'liquid metal' architecture unifies the bracelet and the digital module into a single, aerodynamic form designed for motion.",
    ),
    (
        TextKey::DescText2,
        "The angled interface isn't just aesthetic; it's a driver-focused ergonomic feature allowing for instant data readability at high speeds. A monolithic artifact of the Y2K industrial design era.",
    ),
    (TextKey::TechTitle, "TECHNICAL SPECIFICATIONS"),
    (TextKey::SpecCase, "CONSTRUCTION"),
    (TextKey::SpecFinish, "FINISH"),
    (TextKey::SpecDisplay, "DISPLAY OPTICS"),
    (TextKey::SpecGlass, "LENS"),
    (TextKey::SpecMov, "ENGINE"),
    (TextKey::SpecDim, "DIMENSIONS"),
    (TextKey::SpecWr, "WATER RATING"),
    (TextKey::SpecMat, "MATERIAL"),
    (TextKey::SpecInt, "INTERFACE"),
    (TextKey::SpecYr, "YEAR"),
    (TextKey::GalleryTitle, "ARCHIVE VISUALS"),
];

pub static PT: Table = &[
    (TextKey::NavSpecs, "ESPECIFICAÇÕES"),
    (TextKey::NavGallery, "GALERIA"),
    (TextKey::HeroTitle, "CROMADO<br>LÍQUIDO"),
    (TextKey::Finish, "ACABAMENTO: PRATA POLIDO"),
    (TextKey::DragHint, "[ ARRASTE PARA GIRAR ]"),
    (TextKey::Enable3d, "ATIVAR 3D"),
    (TextKey::Disable3d, "SAIR DO 3D"),
    (TextKey::DescTitle, "VELOCIDADE<br>ESCULPIDA."),
    (TextKey::DescSubtitle, "O LEGADO DE PHIL FRANK / CIRCA 2002"),
    (
        TextKey::DescText1,
        "Executado em aço inoxidável escovado, o D-Line abandona a geometria tradicional. A sua arquitetura de 'metal líquido' unifica a pulseira e o módulo digital numa forma única e aerodinâmica, desenhada para o movimento.",
    ),
    (
        TextKey::DescText2,
        "A interface angulada não é apenas estética; é um recurso ergonômico focado na pilotagem, permitindo leitura instantânea em alta velocidade. Um artefacto monolítico da era do design industrial Y2K.",
    ),
    (TextKey::TechTitle, "ESPECIFICAÇÕES TÉCNICAS"),
    (TextKey::SpecCase, "CONSTRUÇÃO"),
    (TextKey::SpecFinish, "ACABAMENTO"),
    (TextKey::SpecDisplay, "ÓTICA DO DISPLAY"),
    (TextKey::SpecGlass, "LENTE"),
    (TextKey::SpecMov, "MOTOR"),
    (TextKey::SpecDim, "DIMENSÕES"),
    (TextKey::SpecWr, "RESISTÊNCIA À ÁGUA"),
    (TextKey::SpecMat, "MATERIAL"),
    (TextKey::SpecInt, "INTERFACE"),
    (TextKey::SpecYr, "ANO"),
    (TextKey::GalleryTitle, "ARQUIVO VISUAL"),
];

/// Indexed translation tables. A missing entry is a silent miss: the
/// element keeps whatever markup it already had.
pub struct Catalog {
    entries: FnvHashMap<(Locale, TextKey), &'static str>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_tables(EN, PT)
    }

    pub fn from_tables(en: Table, pt: Table) -> Self {
        let mut entries = FnvHashMap::default();
        for (locale, table) in [(Locale::En, en), (Locale::Pt, pt)] {
            for &(key, text) in table {
                if !text.is_empty() {
                    entries.insert((locale, key), text);
                }
            }
        }
        Self { entries }
    }

    pub fn lookup(&self, locale: Locale, key: TextKey) -> Option<&'static str> {
        self.entries.get(&(locale, key)).copied()
    }

    /// Keys with no text for `locale`; reported at startup.
    pub fn missing_keys(&self, locale: Locale) -> Vec<TextKey> {
        TextKey::ALL
            .iter()
            .copied()
            .filter(|k| !self.entries.contains_key(&(locale, *k)))
            .collect()
    }
}

/// Something that carries a translation key and accepts localized markup.
pub trait TextTarget {
    fn i18n_key(&self) -> Option<String>;
    fn set_markup(&mut self, markup: &str);
}

/// Localize every target that has an entry for `locale`. Unknown keys and
/// misses are skipped. Returns the number of targets updated.
pub fn apply<'t, T, I>(catalog: &Catalog, locale: Locale, targets: I) -> usize
where
    T: TextTarget + 't,
    I: IntoIterator<Item = &'t mut T>,
{
    let mut updated = 0;
    for target in targets {
        let Some(key) = target.i18n_key().as_deref().and_then(TextKey::from_attr) else {
            continue;
        };
        if let Some(markup) = catalog.lookup(locale, key) {
            target.set_markup(markup);
            updated += 1;
        }
    }
    updated
}
