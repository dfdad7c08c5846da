use crate::core::model::{parse_glb, ModelData, ModelError};
use crate::core::viewer::body_capacity;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("server answered HTTP {0}")]
    Status(u16),
    #[error("response has no body")]
    NoBody,
    #[error("reading the body failed: {0}")]
    Read(String),
    #[error("timed out after {0} ms")]
    Timeout(u32),
    #[error("cancelled")]
    Cancelled,
    #[error(transparent)]
    Model(#[from] ModelError),
}

fn js_message(v: &JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{:?}", v))
}

/// Cancels an in-flight model request.
#[derive(Clone)]
pub struct LoadHandle {
    controller: web::AbortController,
    cancelled: Rc<Cell<bool>>,
}

impl LoadHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
        self.controller.abort();
    }
}

/// One streamed fetch of the model asset, bounded by a timeout.
pub struct ModelRequest {
    path: String,
    timeout_ms: u32,
    handle: LoadHandle,
    timed_out: Rc<Cell<bool>>,
}

impl ModelRequest {
    pub fn new(path: &str, timeout_ms: u32) -> Result<Self, LoadError> {
        let controller = web::AbortController::new().map_err(|e| LoadError::Fetch(js_message(&e)))?;
        Ok(Self {
            path: path.to_string(),
            timeout_ms,
            handle: LoadHandle {
                controller,
                cancelled: Rc::new(Cell::new(false)),
            },
            timed_out: Rc::new(Cell::new(false)),
        })
    }

    pub fn handle(&self) -> LoadHandle {
        self.handle.clone()
    }

    /// Download the asset, calling `on_progress(loaded, total)` per chunk.
    /// `total` is 0 when the server sends no `Content-Length`.
    pub async fn fetch(&self, mut on_progress: impl FnMut(f64, f64)) -> Result<Vec<u8>, LoadError> {
        let window = web::window().ok_or_else(|| LoadError::Fetch("no window".into()))?;

        let controller = self.handle.controller.clone();
        let timed_out = self.timed_out.clone();
        let on_timeout = Closure::once(move || {
            timed_out.set(true);
            controller.abort();
        });
        let timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.as_ref().unchecked_ref(),
                self.timeout_ms as i32,
            )
            .ok();

        let result = self.read_body(&window, &mut on_progress).await;

        if let Some(id) = timer {
            window.clear_timeout_with_handle(id);
        }
        drop(on_timeout);
        result.map_err(|e| self.classify(e))
    }

    fn classify(&self, err: LoadError) -> LoadError {
        if self.timed_out.get() {
            LoadError::Timeout(self.timeout_ms)
        } else if self.handle.cancelled.get() {
            LoadError::Cancelled
        } else {
            err
        }
    }

    async fn read_body(
        &self,
        window: &web::Window,
        on_progress: &mut impl FnMut(f64, f64),
    ) -> Result<Vec<u8>, LoadError> {
        let init = web::RequestInit::new();
        init.set_signal(Some(&self.handle.controller.signal()));
        let resp = JsFuture::from(window.fetch_with_str_and_init(&self.path, &init))
            .await
            .map_err(|e| LoadError::Fetch(js_message(&e)))?;
        let resp: web::Response = resp
            .dyn_into()
            .map_err(|e| LoadError::Fetch(js_message(&e)))?;
        if !resp.ok() {
            return Err(LoadError::Status(resp.status()));
        }
        let total = resp
            .headers()
            .get("content-length")
            .ok()
            .flatten()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        let body = resp.body().ok_or(LoadError::NoBody)?;
        let reader: web::ReadableStreamDefaultReader = body.get_reader().unchecked_into();

        let mut bytes: Vec<u8> = Vec::with_capacity(body_capacity(total));
        loop {
            let chunk = JsFuture::from(reader.read())
                .await
                .map_err(|e| LoadError::Read(js_message(&e)))?;
            let done = js_sys::Reflect::get(&chunk, &"done".into())
                .ok()
                .and_then(|v| v.as_bool())
                .unwrap_or(true);
            if done {
                break;
            }
            let value = js_sys::Reflect::get(&chunk, &"value".into())
                .map_err(|e| LoadError::Read(js_message(&e)))?;
            let array = js_sys::Uint8Array::new(&value);
            let start = bytes.len();
            bytes.resize(start + array.length() as usize, 0);
            array.copy_to(&mut bytes[start..]);
            on_progress(bytes.len() as f64, total);
        }
        Ok(bytes)
    }
}

/// Fetch and parse the model asset.
pub async fn load_model(
    request: &ModelRequest,
    on_progress: impl FnMut(f64, f64),
) -> Result<ModelData, LoadError> {
    let started = Instant::now();
    let bytes = request.fetch(on_progress).await?;
    log::info!(
        "[loader] fetched {} bytes from {} in {:?}",
        bytes.len(),
        request.path,
        started.elapsed()
    );
    let model = parse_glb(&bytes)?;
    log::info!(
        "[loader] parsed {} meshes, {} vertices, {} triangles",
        model.mesh_count,
        model.vertices.len(),
        model.indices.len() / 3
    );
    Ok(model)
}
