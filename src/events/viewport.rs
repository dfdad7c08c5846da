use crate::constants::HERO_SECTION_ID;
use crate::core::constants::VISIBILITY_THRESHOLD;
use crate::core::viewer::{is_visible, ViewerState};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas and camera in step with the window size.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    state: Rc<RefCell<ViewerState>>,
    pixel_ratio: f64,
) {
    let win = window.clone();
    let canvas = canvas.clone();
    dom::add_listener(window, "resize", move |_: web::Event| {
        let (w, h) = dom::size_canvas_to_viewport(&win, &canvas, pixel_ratio);
        state.borrow_mut().resize(w as f32, h as f32);
    });
}

/// Feed the hero section's visibility into `visible`. Without a hero
/// element the flag stays set and the viewer always renders.
pub fn observe_hero(document: &web::Document, visible: Rc<Cell<bool>>) -> anyhow::Result<()> {
    let Some(hero) = document.get_element_by_id(HERO_SECTION_ID) else {
        log::warn!("[viewer] #{} missing; rendering unconditionally", HERO_SECTION_ID);
        return Ok(());
    };
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let now = is_visible(entry.intersection_ratio());
                if now != visible.get() {
                    log::debug!("[viewer] hero visible: {}", now);
                }
                visible.set(now);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!(format!("IntersectionObserver: {:?}", e)))?;
    observer.observe(&hero);
    callback.forget();
    Ok(())
}
