use crate::constants::DARK_MODE_CLASS;
use crate::core::model::ModelData;
use crate::core::touch::RenderTier;
use crate::core::viewer::{RenderGate, ViewerState};
use crate::dom;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<ViewerState>>,
    pub visible: Rc<Cell<bool>>,
    /// Parsed model waiting for its GPU upload.
    pub pending_model: Rc<RefCell<Option<ModelData>>>,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub gate: RenderGate,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let visible = self.visible.get();
        let mut gate = self.gate;
        let lost = gate.tick(visible, || self.render_frame());
        self.gate = gate;
        if lost == Some(true) {
            log::error!(
                "[viewer] out of GPU memory after {} frames ({} skipped); rendering stopped",
                self.gate.rendered,
                self.gate.skipped()
            );
        }
    }

    /// Returns true when the GPU was lost and dropped.
    fn render_frame(&mut self) -> bool {
        let dark = dom::body_has_class(&self.document, DARK_MODE_CLASS);
        let mut state = self.state.borrow_mut();
        state.advance(dark);

        let Some(gpu) = self.gpu.as_mut() else {
            return false;
        };
        if let Some(model) = self.pending_model.borrow_mut().take() {
            gpu.upload_model(&model);
            log::info!("[viewer] model uploaded ({} indices)", model.indices.len());
        }
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(&state) {
            Ok(()) => false,
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.gpu = None;
                true
            }
            Err(e) => {
                log::warn!("[viewer] frame dropped: {:?}", e);
                false
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    tier: RenderTier,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, tier).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[viewer] GPU init error: {:?}", e);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_tick(tick: &TickClosure) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Start the paint-synchronized loop. It is never cancelled; hidden ticks
/// only skip their work.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_tick(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_tick(&tick);
}
