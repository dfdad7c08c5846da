use crate::constants::{
    DARK_MODE_CLASS, DARK_SCHEME_QUERY, DISABLE_3D_ID, ENABLE_3D_ID, HIDDEN_CLASS, LANG_TOGGLE_ID,
    THEME_TOGGLE_ID, TOUCH_BODY_CLASS,
};
use crate::core::i18n::{self, Catalog, Locale};
use crate::core::theme::ThemeController;
use crate::core::touch::ViewerInteraction;
use crate::dom::{self, LocalStore};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

fn apply_interaction(container: &web::Element, state: ViewerInteraction) {
    for class in [ViewerInteraction::Locked, ViewerInteraction::Active]
        .iter()
        .filter_map(|s| s.container_class())
    {
        dom::set_class(container, class, state.container_class() == Some(class));
    }
}

/// Mark the page for touch or pointer input and wire the opt-in 3D buttons.
/// The returned cell is shared with the canvas pointer handlers.
pub fn wire_touch_gate(
    document: &web::Document,
    container: &web::HtmlElement,
    touch: bool,
) -> Rc<Cell<ViewerInteraction>> {
    let interaction = Rc::new(Cell::new(ViewerInteraction::initial(touch)));
    if touch {
        dom::set_body_class(document, TOUCH_BODY_CLASS, true);
    } else {
        _ = container.style().set_property("pointer-events", "auto");
    }
    apply_interaction(container, interaction.get());

    let (Some(enable_btn), Some(disable_btn)) = (
        document.get_element_by_id(ENABLE_3D_ID),
        document.get_element_by_id(DISABLE_3D_ID),
    ) else {
        log::debug!("[touch] 3D toggle buttons not present");
        return interaction;
    };

    {
        let interaction = interaction.clone();
        let container = container.clone();
        let (enable_btn, disable_btn) = (enable_btn.clone(), disable_btn.clone());
        dom::add_click_listener(document, ENABLE_3D_ID, move || {
            let next = interaction.get().enable();
            interaction.set(next);
            apply_interaction(&container, next);
            dom::set_class(&enable_btn, HIDDEN_CLASS, true);
            dom::set_class(&disable_btn, HIDDEN_CLASS, false);
            log::info!("[touch] 3D interaction {:?}", next);
        });
    }
    {
        let interaction = interaction.clone();
        let container = container.clone();
        dom::add_click_listener(document, DISABLE_3D_ID, move || {
            let next = interaction.get().disable();
            interaction.set(next);
            apply_interaction(&container, next);
            dom::set_class(&disable_btn, HIDDEN_CLASS, true);
            dom::set_class(&enable_btn, HIDDEN_CLASS, false);
            log::info!("[touch] 3D interaction {:?}", next);
        });
    }
    interaction
}

/// Apply the initial theme, then follow the toggle button and the system
/// color-scheme preference.
pub fn wire_theme(window: &web::Window, document: &web::Document) {
    let controller = ThemeController::new(
        LocalStore::open(window),
        dom::prefers_dark(window, DARK_SCHEME_QUERY),
    );
    let initial = controller.applied();
    dom::set_body_class(document, DARK_MODE_CLASS, initial.is_dark());
    log::info!(
        "[theme] initial {} (explicit preference: {})",
        initial.as_str(),
        controller.has_explicit_preference()
    );
    let controller = Rc::new(RefCell::new(controller));

    let doc = document.clone();
    let on_click = controller.clone();
    let wired = dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let theme = on_click.borrow_mut().toggle();
        dom::set_body_class(&doc, DARK_MODE_CLASS, theme.is_dark());
        log::info!("[theme] switched to {}", theme.as_str());
    });
    if !wired {
        log::warn!("[theme] #{} missing; toggle disabled", THEME_TOGGLE_ID);
    }

    if let Ok(Some(query)) = window.match_media(DARK_SCHEME_QUERY) {
        let doc = document.clone();
        dom::add_listener(&query, "change", move |ev: web::MediaQueryListEvent| {
            if let Some(theme) = controller.borrow_mut().on_system_change(ev.matches()) {
                dom::set_body_class(&doc, DARK_MODE_CLASS, theme.is_dark());
                log::info!("[theme] following system: {}", theme.as_str());
            }
        });
    }
}

/// Localize every `[data-i18n]` element and show the locale on the toggle.
pub fn set_language(document: &web::Document, catalog: &Catalog, locale: Locale) {
    if let Some(toggle) = dom::html_element(document, LANG_TOGGLE_ID) {
        toggle.set_inner_text(locale.indicator());
    }
    let mut targets = dom::i18n_elements(document);
    let updated = i18n::apply(catalog, locale, targets.iter_mut());
    log::info!(
        "[i18n] {} applied to {}/{} elements",
        locale.code(),
        updated,
        targets.len()
    );
}

pub fn wire_language(window: &web::Window, document: &web::Document) {
    let catalog = Catalog::builtin();
    for locale in Locale::ALL {
        let missing = catalog.missing_keys(locale);
        if !missing.is_empty() {
            log::warn!("[i18n] {} has no text for {:?}", locale.code(), missing);
        }
    }

    let initial = window
        .navigator()
        .language()
        .map(|lang| Locale::from_browser_language(&lang))
        .unwrap_or(Locale::En);
    set_language(document, &catalog, initial);

    let current = Cell::new(initial);
    let doc = document.clone();
    dom::add_click_listener(document, LANG_TOGGLE_ID, move || {
        let next = current.get().toggled();
        current.set(next);
        set_language(&doc, &catalog, next);
    });
}
