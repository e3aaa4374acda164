use crate::core::{
    DrawSurface, FieldError, SpriteDraw, SpritePalette, SurfaceSize, Vignette,
};
use crate::dom;
use wasm_bindgen::JsValue;
use web_sys as web;

type SurfaceResult = Result<(), FieldError>;

#[inline]
fn js_err(op: &str, e: JsValue) -> FieldError {
    FieldError::Surface(format!("{op}: {e:?}"))
}

/// Canvas 2D implementation of the engine's drawing surface. Sprites are
/// decoded by the browser from their SVG data URLs; an image that has not
/// finished loading simply draws nothing.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    images: Vec<web::HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = dom::canvas_2d_context(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            images: Vec::new(),
        })
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, size: SurfaceSize) -> SurfaceResult {
        if self.canvas.width() != size.width {
            self.canvas.set_width(size.width);
        }
        if self.canvas.height() != size.height {
            self.canvas.set_height(size.height);
        }
        Ok(())
    }

    fn set_palette(&mut self, palette: &SpritePalette) -> SurfaceResult {
        let images = palette
            .iter()
            .map(|sprite| {
                let img = web::HtmlImageElement::new().map_err(|e| js_err("new Image", e))?;
                img.set_src(&sprite.data_url());
                Ok(img)
            })
            .collect::<Result<Vec<_>, FieldError>>()?;
        self.images = images;
        Ok(())
    }

    fn clear(&mut self, size: SurfaceSize) -> SurfaceResult {
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
        Ok(())
    }

    fn fill_vignette(&mut self, size: SurfaceSize, vignette: &Vignette) -> SurfaceResult {
        let (cx, cy, r) = (
            vignette.cx as f64,
            vignette.cy as f64,
            vignette.radius as f64,
        );
        let gradient = self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, r)
            .map_err(|e| js_err("createRadialGradient", e))?;
        gradient
            .add_color_stop(0.0, vignette.inner)
            .map_err(|e| js_err("addColorStop", e))?;
        gradient
            .add_color_stop(1.0, vignette.outer)
            .map_err(|e| js_err("addColorStop", e))?;
        #[allow(deprecated)]
        self.ctx.set_fill_style(&gradient);
        self.ctx
            .fill_rect(0.0, 0.0, size.width as f64, size.height as f64);
        Ok(())
    }

    fn draw_sprite(&mut self, draw: &SpriteDraw) -> SurfaceResult {
        let Some(img) = self.images.get(draw.sprite) else {
            return Ok(());
        };
        self.ctx.save();
        let res = blit(&self.ctx, img, draw);
        self.ctx.restore();
        res
    }
}

fn blit(
    ctx: &web::CanvasRenderingContext2d,
    img: &web::HtmlImageElement,
    draw: &SpriteDraw,
) -> SurfaceResult {
    ctx.translate(draw.x as f64, draw.y as f64)
        .map_err(|e| js_err("translate", e))?;
    if draw.zoom != 1.0 {
        ctx.scale(draw.zoom as f64, draw.zoom as f64)
            .map_err(|e| js_err("scale", e))?;
    }
    if draw.angle != 0.0 {
        ctx.rotate((draw.angle as f64).to_radians())
            .map_err(|e| js_err("rotate", e))?;
    }
    ctx.set_global_alpha(draw.alpha.clamp(0.0, 1.0) as f64);
    let s = draw.size as f64;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, -s / 2.0, -s / 2.0, s, s)
        .map_err(|e| js_err("drawImage", e))
}
