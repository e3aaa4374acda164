use super::Listener;
use crate::constants::{
    CURSOR_DRAGGING, CURSOR_IDLE, EV_CLICK, EV_POINTER_DOWN, EV_POINTER_LEAVE, EV_POINTER_MOVE,
    EV_POINTER_UP, EV_WHEEL,
};
use crate::dom;
use crate::layer::SharedStage;
use instant::Instant;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Attach every canvas listener the layer needs. On failure the listeners
/// attached so far are removed again before the error is returned.
pub fn wire_canvas_input(
    canvas: &web::HtmlCanvasElement,
    stage: &SharedStage,
) -> Result<Vec<Listener>, JsValue> {
    let wiring: [fn(&web::HtmlCanvasElement, &SharedStage) -> Result<Listener, JsValue>; 6] = [
        wire_pointerdown,
        wire_pointermove,
        wire_pointerup,
        wire_pointerleave,
        wire_wheel,
        wire_click,
    ];
    let mut attached = Vec::with_capacity(wiring.len());
    for wire in wiring {
        match wire(canvas, stage) {
            Ok(l) => attached.push(l),
            Err(e) => {
                attached.into_iter().for_each(Listener::detach);
                return Err(e);
            }
        }
    }
    Ok(attached)
}

// Drag deltas only need a consistent frame, so raw client coordinates do.
fn wire_pointerdown(
    canvas: &web::HtmlCanvasElement,
    stage: &SharedStage,
) -> Result<Listener, JsValue> {
    let stage = stage.clone();
    let cursor_target = canvas.clone();
    Listener::attach(canvas, EV_POINTER_DOWN, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if stage
            .borrow_mut()
            .pointer_down(ev.client_x() as f32, ev.client_y() as f32)
        {
            dom::set_cursor(&cursor_target, CURSOR_DRAGGING);
        }
    })
}

fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    stage: &SharedStage,
) -> Result<Listener, JsValue> {
    let stage = stage.clone();
    Listener::attach(canvas, EV_POINTER_MOVE, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        stage
            .borrow_mut()
            .pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    })
}

fn wire_pointerup(
    canvas: &web::HtmlCanvasElement,
    stage: &SharedStage,
) -> Result<Listener, JsValue> {
    let stage = stage.clone();
    let cursor_target = canvas.clone();
    Listener::attach(canvas, EV_POINTER_UP, move |_ev: web::Event| {
        if stage.borrow_mut().pointer_up() {
            dom::set_cursor(&cursor_target, CURSOR_IDLE);
        }
    })
}

fn wire_pointerleave(
    canvas: &web::HtmlCanvasElement,
    stage: &SharedStage,
) -> Result<Listener, JsValue> {
    let stage = stage.clone();
    let cursor_target = canvas.clone();
    Listener::attach(canvas, EV_POINTER_LEAVE, move |_ev: web::Event| {
        if stage.borrow_mut().pointer_leave() {
            dom::set_cursor(&cursor_target, CURSOR_IDLE);
        }
    })
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, stage: &SharedStage) -> Result<Listener, JsValue> {
    let stage = stage.clone();
    Listener::attach(canvas, EV_WHEEL, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        stage.borrow_mut().wheel(ev.delta_y() as f32);
    })
}

// Hit-testing needs the same pixel frame the field renders into.
fn wire_click(canvas: &web::HtmlCanvasElement, stage: &SharedStage) -> Result<Listener, JsValue> {
    let stage = stage.clone();
    let canvas_for_click = canvas.clone();
    Listener::attach(canvas, EV_CLICK, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = dom::client_to_canvas_px(&canvas_for_click, ev.client_x(), ev.client_y());
        if let Some(i) = stage.borrow_mut().click(pos.x, pos.y, Instant::now()) {
            log::info!("[click] popped balloon {}", i);
        }
    })
}
