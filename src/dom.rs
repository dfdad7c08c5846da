use crate::core::i18n::{TextTarget, I18N_ATTRIBUTE};
use crate::core::theme::PreferenceStore;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        true
    } else {
        false
    }
}

/// Attach a typed event listener for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

pub fn body_has_class(document: &web::Document, class: &str) -> bool {
    document
        .body()
        .map(|b| b.class_list().contains(class))
        .unwrap_or(false)
}

pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        set_class(&body, class, on);
    }
}

pub fn prefers_dark(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// `ontouchstart in window || navigator.maxTouchPoints > 0`
pub fn touch_signals(window: &web::Window) -> (bool, i32) {
    let has_touch_events = js_sys::Reflect::has(window, &"ontouchstart".into()).unwrap_or(false);
    (has_touch_events, window.navigator().max_touch_points())
}

/// Sizes the canvas to the viewport; backing store scaled by `pixel_ratio`.
pub fn size_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement, pixel_ratio: f64) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    canvas.set_width(((w * pixel_ratio) as u32).max(1));
    canvas.set_height(((h * pixel_ratio) as u32).max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", w));
    _ = style.set_property("height", &format!("{}px", h));
    (w, h)
}

/// `localStorage`, if the browser lets us have it.
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn open(window: &web::Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("[theme] localStorage unavailable; following system preference only");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn store(&mut self, key: &str, value: &str) -> bool {
        match &self.storage {
            Some(s) => s.set_item(key, value).is_ok(),
            None => false,
        }
    }
}

/// A `[data-i18n]` element as a localization target.
pub struct I18nElement(pub web::Element);

impl TextTarget for I18nElement {
    fn i18n_key(&self) -> Option<String> {
        self.0.get_attribute(I18N_ATTRIBUTE)
    }

    fn set_markup(&mut self, markup: &str) {
        self.0.set_inner_html(markup);
    }
}

pub fn i18n_elements(document: &web::Document) -> Vec<I18nElement> {
    let Ok(list) = document.query_selector_all(&format!("[{}]", I18N_ATTRIBUTE)) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .map(I18nElement)
        .collect()
}
