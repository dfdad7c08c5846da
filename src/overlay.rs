use crate::constants::{LOADER_ID, LOAD_FAILED_CLASS, PROGRESS_BAR_ID};
use crate::core::constants::{OVERLAY_FADE_DELAY_MS, OVERLAY_HIDE_DELAY_MS};
use crate::core::viewer::OverlayPhase;
use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn set_progress(document: &web::Document, width: &str) {
    if let Some(bar) = dom::html_element(document, PROGRESS_BAR_ID) {
        _ = bar.style().set_property("width", width);
    }
}

/// Apply one phase of the loader fade-out.
pub fn apply_phase(document: &web::Document, phase: OverlayPhase) {
    if let Some(el) = dom::html_element(document, LOADER_ID) {
        let style = el.style();
        match phase {
            OverlayPhase::Visible => {
                _ = style.set_property("opacity", "1");
                _ = style.remove_property("display");
            }
            OverlayPhase::Fading => {
                _ = style.set_property("opacity", "0");
            }
            OverlayPhase::Hidden => {
                _ = style.set_property("display", "none");
            }
        }
    }
}

#[inline]
pub fn mark_failed(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        dom::set_class(&el, LOAD_FAILED_CLASS, true);
    }
}

/// Fade the loader out once the load settled: transparent after the fade
/// delay, removed from layout after the hide delay.
pub fn dismiss(document: &web::Document) {
    schedule_phase(document, OverlayPhase::Fading, OVERLAY_FADE_DELAY_MS);
    schedule_phase(
        document,
        OverlayPhase::Hidden,
        OVERLAY_FADE_DELAY_MS + OVERLAY_HIDE_DELAY_MS,
    );
}

fn schedule_phase(document: &web::Document, phase: OverlayPhase, delay_ms: u32) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let closure = Closure::once(move || apply_phase(&doc, phase));
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms as i32,
    );
    closure.forget();
}
