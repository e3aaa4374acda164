// Shared test double: a drawing surface that records every call.

#![allow(dead_code)]
use card_particles::core::{
    ColorMode, DrawSurface, FieldError, SpriteDraw, SpritePalette, SurfaceSize, Vignette,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Resize(SurfaceSize),
    Palette(usize, ColorMode),
    Clear(SurfaceSize),
    Vignette(Vignette),
    Sprite(SpriteDraw),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    pub fail_draws: bool,
}

impl RecordingSurface {
    pub fn failing() -> Self {
        Self {
            ops: Vec::new(),
            fail_draws: true,
        }
    }

    pub fn sprites(&self) -> Vec<SpriteDraw> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Sprite(d) => Some(*d),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, size: SurfaceSize) -> Result<(), FieldError> {
        self.ops.push(Op::Resize(size));
        Ok(())
    }

    fn set_palette(&mut self, palette: &SpritePalette) -> Result<(), FieldError> {
        self.ops.push(Op::Palette(palette.len(), palette.color_mode()));
        Ok(())
    }

    fn clear(&mut self, size: SurfaceSize) -> Result<(), FieldError> {
        self.ops.push(Op::Clear(size));
        Ok(())
    }

    fn fill_vignette(&mut self, _size: SurfaceSize, vignette: &Vignette) -> Result<(), FieldError> {
        self.ops.push(Op::Vignette(*vignette));
        Ok(())
    }

    fn draw_sprite(&mut self, draw: &SpriteDraw) -> Result<(), FieldError> {
        if self.fail_draws {
            return Err(FieldError::Surface("drawImage rejected".into()));
        }
        self.ops.push(Op::Sprite(*draw));
        Ok(())
    }
}
