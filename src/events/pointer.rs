use crate::constants::{ACTIVE_CLASS, GALLERY_SELECTOR};
use crate::core::carousel::CarouselDrag;
use crate::core::touch::ViewerInteraction;
use crate::core::viewer::ViewerState;
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag-to-rotate on the viewer canvas.
pub fn wire_orbit(
    canvas: &web::HtmlCanvasElement,
    state: Rc<RefCell<ViewerState>>,
    interaction: Rc<Cell<ViewerInteraction>>,
) {
    {
        let state = state.clone();
        let canvas_down = canvas.clone();
        dom::add_listener(canvas, "pointerdown", move |ev: web::PointerEvent| {
            if ev.button() != 0 || !interaction.get().captures_pointer() {
                return;
            }
            state
                .borrow_mut()
                .controls
                .begin_rotate(ev.client_x() as f32, ev.client_y() as f32);
            _ = canvas_down.set_pointer_capture(ev.pointer_id());
        });
    }
    {
        let state = state.clone();
        let canvas_move = canvas.clone();
        dom::add_listener(canvas, "pointermove", move |ev: web::PointerEvent| {
            let mut s = state.borrow_mut();
            if !s.controls.is_rotating() {
                return;
            }
            s.controls.rotate_to(
                ev.client_x() as f32,
                ev.client_y() as f32,
                canvas_move.client_height() as f32,
            );
        });
    }
    for event in ["pointerup", "pointercancel"] {
        let state = state.clone();
        let canvas_up = canvas.clone();
        dom::add_listener(canvas, event, move |ev: web::PointerEvent| {
            state.borrow_mut().controls.end_rotate();
            _ = canvas_up.release_pointer_capture(ev.pointer_id());
        });
    }
}

/// Click-and-drag scrolling for the gallery strip. Returns false when the
/// page has no gallery.
pub fn wire_carousel(document: &web::Document) -> bool {
    let Some(slider) = document
        .query_selector(GALLERY_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::debug!("[carousel] no {} on this page", GALLERY_SELECTOR);
        return false;
    };
    let drag = Rc::new(Cell::new(CarouselDrag::default()));

    {
        let drag = drag.clone();
        let el = slider.clone();
        dom::add_listener(&slider, "mousedown", move |ev: web::MouseEvent| {
            let mut d = drag.get();
            d.press(
                ev.page_x() as f64,
                el.offset_left() as f64,
                el.scroll_left() as f64,
            );
            drag.set(d);
            dom::set_class(&el, ACTIVE_CLASS, true);
        });
    }
    for event in ["mouseleave", "mouseup"] {
        let drag = drag.clone();
        let el = slider.clone();
        dom::add_listener(&slider, event, move |_: web::MouseEvent| {
            let mut d = drag.get();
            d.release();
            drag.set(d);
            dom::set_class(&el, ACTIVE_CLASS, false);
        });
    }
    {
        let el = slider.clone();
        dom::add_listener(&slider, "mousemove", move |ev: web::MouseEvent| {
            if let Some(left) = drag.get().drag_to(ev.page_x() as f64, el.offset_left() as f64) {
                ev.prevent_default();
                el.set_scroll_left(left.round() as i32);
            }
        });
    }
    log::info!("[carousel] drag scrolling wired");
    true
}
