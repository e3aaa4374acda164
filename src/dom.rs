use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels; the page shell feeds this to layers.
pub fn window_inner_size() -> Option<(i64, i64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width as i64, height as i64))
}

pub fn canvas_2d_context(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))
}

/// Client coordinates to canvas backing-store pixels, the space the field
/// projects into.
#[inline]
pub fn client_to_canvas_px(
    canvas: &web::HtmlCanvasElement,
    client_x: i32,
    client_y: i32,
) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x as f32 - rect.left() as f32;
    let y_css = client_y as f32 - rect.top() as f32;
    let rw = rect.width() as f32;
    let rh = rect.height() as f32;
    if rw <= 0.0 || rh <= 0.0 {
        return Vec2::new(x_css, y_css);
    }
    Vec2::new(
        x_css / rw * canvas.width() as f32,
        y_css / rh * canvas.height() as f32,
    )
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    _ = canvas.style().set_property("cursor", cursor);
}
