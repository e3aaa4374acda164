use crate::constants::CURSOR_IDLE;
use crate::core::{ColorMode, FieldConfig, ParticleField, Stage, SurfaceSize, Variant};
use crate::dom;
use crate::events::{self, Listener};
use crate::frame::{self, FrameLoop};
use crate::render::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub type SharedStage = Rc<RefCell<Stage<CanvasSurface>>>;

fn to_js(e: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{e:#}")).into()
}

/// One falling-object layer bound to a canvas. The host supplies the
/// surface size and forwards resizes; the layer owns its listeners and
/// frame loop between `start()` and `stop()`.
#[wasm_bindgen]
pub struct ParticleLayer {
    canvas: web::HtmlCanvasElement,
    stage: SharedStage,
    listeners: Vec<Listener>,
    frame: Option<FrameLoop>,
    name: String,
}

#[wasm_bindgen]
impl ParticleLayer {
    /// `variant` is one of `hearts`, `balloons` or `blossoms`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: web::HtmlCanvasElement,
        variant: &str,
        width: i32,
        height: i32,
    ) -> Result<ParticleLayer, JsValue> {
        let variant: Variant = variant.parse().map_err(|e| to_js(anyhow::Error::new(e)))?;
        Self::build(canvas, variant.config(), variant.name(), width as i64, height as i64)
            .map_err(to_js)
    }

    /// Like `new`, with a JSON object of config overrides applied on top of
    /// the variant's preset.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        canvas: web::HtmlCanvasElement,
        variant: &str,
        config_json: &str,
        width: i32,
        height: i32,
    ) -> Result<ParticleLayer, JsValue> {
        let variant: Variant = variant.parse().map_err(|e| to_js(anyhow::Error::new(e)))?;
        let config = FieldConfig::from_json(config_json, &variant.config())
            .map_err(|e| to_js(anyhow::Error::new(e)))?;
        Self::build(canvas, config, variant.name(), width as i64, height as i64).map_err(to_js)
    }

    /// Attach listeners and begin the frame loop. Returns `false` if the
    /// layer was already running.
    pub fn start(&mut self) -> Result<bool, JsValue> {
        if !self.stage.borrow_mut().start() {
            return Ok(false);
        }
        match events::wire_canvas_input(&self.canvas, &self.stage) {
            Ok(listeners) => self.listeners = listeners,
            Err(e) => {
                self.stage.borrow_mut().stop();
                log::error!("[layer] {} failed to attach listeners: {:?}", self.name, e);
                return Err(e);
            }
        }
        self.frame = Some(frame::start_loop(self.stage.clone()));
        log::info!("[layer] {} started", self.name);
        Ok(true)
    }

    /// Cancel the frame loop and detach every listener. Returns `true` only
    /// for the call that tore the layer down.
    pub fn stop(&mut self) -> bool {
        if !self.stage.borrow_mut().stop() {
            return false;
        }
        if let Some(f) = self.frame.take() {
            f.cancel();
        }
        self.listeners.drain(..).for_each(Listener::detach);
        dom::set_cursor(&self.canvas, CURSOR_IDLE);
        let (frames, failed) = self.stage.borrow().frame_counts();
        log::info!(
            "[layer] {} stopped after {} frames ({} skipped)",
            self.name,
            frames,
            failed
        );
        true
    }

    pub fn resize(&self, width: i32, height: i32) {
        self.stage.borrow_mut().resize(width as i64, height as i64);
    }

    /// Neutral sprites while muted, tinted while the soundtrack plays.
    #[wasm_bindgen(js_name = setMuted)]
    pub fn set_muted(&self, muted: bool) {
        self.stage
            .borrow_mut()
            .set_color_mode(ColorMode::for_muted(muted));
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.stage.borrow().is_running()
    }
}

impl ParticleLayer {
    pub(crate) fn build(
        canvas: web::HtmlCanvasElement,
        config: FieldConfig,
        name: &str,
        width: i64,
        height: i64,
    ) -> anyhow::Result<Self> {
        let surface = CanvasSurface::new(canvas.clone())?;
        let field = ParticleField::new(config, SurfaceSize::new(width, height), rand::random());
        let stage = Stage::new(field, surface)?;
        dom::set_cursor(&canvas, CURSOR_IDLE);
        log::info!(
            "[layer] mounted {} ({} particles)",
            name,
            stage.field().particles().len()
        );
        Ok(Self {
            canvas,
            stage: Rc::new(RefCell::new(stage)),
            listeners: Vec::new(),
            frame: None,
            name: name.to_string(),
        })
    }
}

impl Drop for ParticleLayer {
    fn drop(&mut self) {
        self.stop();
    }
}
