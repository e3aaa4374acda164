//! Drawing backend seam. The engine only ever talks to a [`DrawSurface`];
//! the web build implements it over a Canvas 2D context and tests over a
//! recording double.

use super::config::SurfaceSize;
use super::constants::{VIGNETTE_INNER_RGBA, VIGNETTE_OUTER_RGBA};
use super::error::Result;
use super::sprite::SpritePalette;

/// Radial background fade painted under the particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vignette {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub inner: &'static str,
    pub outer: &'static str,
}

impl Vignette {
    pub fn for_surface(size: SurfaceSize) -> Self {
        let (cx, cy) = size.center();
        Self {
            cx,
            cy,
            radius: size.width.max(size.height) as f32 / 2.0,
            inner: VIGNETTE_INNER_RGBA,
            outer: VIGNETTE_OUTER_RGBA,
        }
    }
}

/// One sprite blit, already in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteDraw {
    pub sprite: usize,
    pub x: f32,
    pub y: f32,
    /// Side of the destination square before `zoom`.
    pub size: f32,
    /// Spin in degrees about the sprite centre.
    pub angle: f32,
    pub alpha: f32,
    /// Extra scale applied about the centre (pop animation).
    pub zoom: f32,
}

pub trait DrawSurface {
    fn resize(&mut self, size: SurfaceSize) -> Result<()>;
    fn set_palette(&mut self, palette: &SpritePalette) -> Result<()>;
    fn clear(&mut self, size: SurfaceSize) -> Result<()>;
    fn fill_vignette(&mut self, size: SurfaceSize, vignette: &Vignette) -> Result<()>;
    fn draw_sprite(&mut self, draw: &SpriteDraw) -> Result<()>;
}
