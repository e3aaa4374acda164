//! Page shell: logging setup and auto-mounting of `data-particles` canvases.
//!
//! This is the only place that reads window size; layers just receive it.

use crate::constants::{CONFIG_ATTR, EV_RESIZE, MOUNT_SELECTOR, VARIANT_ATTR};
use crate::core::{FieldConfig, Variant};
use crate::dom;
use crate::events::Listener;
use crate::layer::ParticleLayer;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static MOUNTED: RefCell<Vec<ParticleLayer>> = const { RefCell::new(Vec::new()) };
    static WINDOW_RESIZE: RefCell<Option<Listener>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-particles starting");

    if let Err(e) = mount_document_layers() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

/// Apply the mute state to every auto-mounted layer.
#[wasm_bindgen(js_name = setMuted)]
pub fn set_muted(muted: bool) {
    MOUNTED.with(|m| {
        for layer in m.borrow().iter() {
            layer.set_muted(muted);
        }
    });
}

/// Stop and release every auto-mounted layer. Returns how many were stopped.
#[wasm_bindgen(js_name = unmountAll)]
pub fn unmount_all() -> usize {
    if let Some(listener) = WINDOW_RESIZE.with(|r| r.borrow_mut().take()) {
        listener.detach();
    }
    let layers = MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    layers
        .into_iter()
        .map(|mut layer| layer.stop())
        .filter(|stopped| *stopped)
        .count()
}

fn mount_document_layers() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let nodes = document
        .query_selector_all(MOUNT_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let (width, height) = dom::window_inner_size().unwrap_or((1, 1));

    let mut layers = Vec::new();
    for i in 0..nodes.length() {
        let Some(canvas) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            continue;
        };
        match mount_canvas(canvas, width, height) {
            Ok(layer) => layers.push(layer),
            Err(e) => log::error!("[layer] mount failed: {:#}", e),
        }
    }
    if layers.is_empty() {
        return Ok(());
    }
    MOUNTED.with(|m| m.borrow_mut().extend(layers));
    wire_window_resize()
}

fn mount_canvas(
    canvas: web::HtmlCanvasElement,
    width: i64,
    height: i64,
) -> anyhow::Result<ParticleLayer> {
    let variant: Variant = canvas
        .get_attribute(VARIANT_ATTR)
        .unwrap_or_default()
        .parse()?;
    let config = match canvas.get_attribute(CONFIG_ATTR) {
        Some(json) => FieldConfig::from_json(&json, &variant.config())?,
        None => variant.config(),
    };
    let mut layer = ParticleLayer::build(canvas, config, variant.name(), width, height)?;
    layer
        .start()
        .map_err(|e| anyhow::anyhow!("start failed: {:?}", e))?;
    Ok(layer)
}

fn wire_window_resize() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let listener = Listener::attach(&window, EV_RESIZE, |_ev: web::Event| {
        let Some((w, h)) = dom::window_inner_size() else {
            return;
        };
        MOUNTED.with(|m| {
            for layer in m.borrow().iter() {
                layer.resize(w as i32, h as i32);
            }
        });
    })
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    WINDOW_RESIZE.with(|r| *r.borrow_mut() = Some(listener));
    Ok(())
}
