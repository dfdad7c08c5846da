#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_CONTAINER_ID, MODEL_PATH};
use crate::core::constants::MODEL_LOAD_TIMEOUT_MS;
use crate::core::model::ModelData;
use crate::core::touch::{is_touch_primary, RenderTier};
use crate::core::viewer::{RenderGate, ViewerState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod loader;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chrome-viewer starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (has_touch_events, max_touch_points) = dom::touch_signals(&window);
    let touch = is_touch_primary(has_touch_events, max_touch_points);
    log::info!(
        "[touch] touch-primary={} (ontouchstart={}, maxTouchPoints={})",
        touch,
        has_touch_events,
        max_touch_points
    );
    let container = dom::html_element(&document, CANVAS_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_CONTAINER_ID))?;
    let interaction = events::wire_touch_gate(&document, &container, touch);

    events::wire_theme(&window, &document);
    events::wire_language(&window, &document);
    events::wire_carousel(&document);

    let tier = RenderTier::for_device(touch);
    let pixel_ratio = tier.pixel_ratio(window.device_pixel_ratio());
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let (css_w, css_h) = dom::size_canvas_to_viewport(&window, &canvas, pixel_ratio);
    log::info!(
        "[viewer] tier msaa={} precision={:?} pixel_ratio={} canvas {}x{}",
        tier.sample_count,
        tier.precision,
        pixel_ratio,
        canvas.width(),
        canvas.height()
    );

    let state = Rc::new(RefCell::new(ViewerState::new(
        (css_w / css_h.max(1.0)) as f32,
    )));
    let visible = Rc::new(Cell::new(true));
    let pending_model: Rc<RefCell<Option<ModelData>>> = Rc::new(RefCell::new(None));

    events::wire_resize(&window, &canvas, state.clone(), pixel_ratio);
    events::wire_orbit(&canvas, state.clone(), interaction);
    if let Err(e) = events::observe_hero(&document, visible.clone()) {
        log::warn!("[viewer] visibility gating off: {:?}", e);
    }

    // the download runs alongside adapter and device setup
    spawn_local(load_model_into(
        window.clone(),
        document.clone(),
        state.clone(),
        pending_model.clone(),
    ));

    let gpu = frame::init_gpu(&canvas, tier).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        visible,
        pending_model,
        document,
        canvas,
        gpu,
        gate: RenderGate::default(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

async fn load_model_into(
    window: web::Window,
    document: web::Document,
    state: Rc<RefCell<ViewerState>>,
    pending_model: Rc<RefCell<Option<ModelData>>>,
) {
    let result = match loader::ModelRequest::new(MODEL_PATH, MODEL_LOAD_TIMEOUT_MS) {
        Ok(request) => {
            let handle = request.handle();
            dom::add_listener(&window, "pagehide", move |_: web::Event| handle.cancel());

            let doc = document.clone();
            let progress_state = state.clone();
            loader::load_model(&request, move |loaded, total| {
                if let Some(width) = progress_state.borrow_mut().on_progress(loaded, total) {
                    overlay::set_progress(&doc, &width);
                }
            })
            .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(model) => {
            let pose = state.borrow_mut().place_model(&model.bounds);
            log::info!(
                "[viewer] model placed: scale {:.3}, center ({:.2}, {:.2}, {:.2})",
                pose.scale,
                pose.center.x,
                pose.center.y,
                pose.center.z
            );
            *pending_model.borrow_mut() = Some(model);
        }
        Err(e) => {
            log::error!("[loader] {} failed: {}", MODEL_PATH, e);
            state.borrow_mut().fail(e.to_string());
            overlay::mark_failed(&document);
        }
    }
    overlay::dismiss(&document);
}
