//! Sprite generation.
//!
//! Sprites are small SVG documents rendered once per field and shared by
//! index across all particles. Generation is pure; turning a sprite into
//! pixels is the drawing surface's job.

use super::config::{ColorMode, SpriteShape};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteParams {
    pub shape: SpriteShape,
    /// Position in the palette; higher indices fade out and darken.
    pub index: usize,
    pub color_mode: ColorMode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    markup: String,
}

impl Sprite {
    #[inline]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Base64 `data:` URL suitable for an image element's `src`.
    pub fn data_url(&self) -> String {
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(&self.markup))
    }
}

/// Straight RGBA fill with alpha in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Fill {
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{:.2})", self.r, self.g, self.b, self.a)
    }
}

/// Fill colour for one palette entry.
pub fn sprite_fill(params: &SpriteParams) -> Fill {
    let i = params.index.min(u8::MAX as usize) as u8;
    let fi = params.index as f32;
    let step = |base: u8, per: u8| base.saturating_sub(per.saturating_mul(i));
    let (alpha_base, alpha_step) = match params.shape {
        SpriteShape::Heart => (0.7, 0.1),
        SpriteShape::Balloon => (0.8, 0.2),
        SpriteShape::Blossom => (0.75, 0.15),
    };
    let a = (alpha_base - alpha_step * fi).clamp(0.05, 1.0);
    match (params.color_mode, params.shape) {
        (ColorMode::Neutral, _) => Fill {
            r: 255,
            g: 255,
            b: 255,
            a,
        },
        (ColorMode::Tinted, SpriteShape::Heart) => Fill {
            r: step(255, 20),
            g: step(120, 20),
            b: step(150, 20),
            a,
        },
        (ColorMode::Tinted, SpriteShape::Balloon) => Fill {
            r: step(255, 30),
            g: step(105, 20),
            b: step(180, 30),
            a,
        },
        (ColorMode::Tinted, SpriteShape::Blossom) => Fill {
            r: 255,
            g: step(183, 15),
            b: step(197, 15),
            a,
        },
    }
}

pub fn generate_sprite(params: &SpriteParams) -> Sprite {
    let fill = sprite_fill(params).css();
    let markup = match params.shape {
        SpriteShape::Heart => format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><path fill="{fill}" d="M50,30 Q30,10 10,30 Q-5,50 25,75 Q50,95 50,95 Q50,95 75,75 Q105,50 90,30 Q70,10 50,30 Z"/></svg>"#
        ),
        SpriteShape::Balloon => format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 120"><ellipse cx="50" cy="70" rx="40" ry="50" fill="{fill}"/><path d="M50,120 Q55,110 60,120 Q65,110 70,120" stroke="{fill}" stroke-width="2" fill="none"/></svg>"#
        ),
        SpriteShape::Blossom => {
            let petals: String = (0..5)
                .map(|k| {
                    format!(
                        r#"<ellipse cx="50" cy="28" rx="16" ry="24" fill="{fill}" transform="rotate({} 50 50)"/>"#,
                        k * 72
                    )
                })
                .collect();
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">{petals}<circle cx="50" cy="50" r="8" fill="rgba(255,240,200,{:.2})"/></svg>"#,
                sprite_fill(params).a
            )
        }
    };
    Sprite { markup }
}

/// Fixed set of sprites shared by every particle of a field.
#[derive(Clone, Debug, PartialEq)]
pub struct SpritePalette {
    sprites: Vec<Sprite>,
    color_mode: ColorMode,
}

impl SpritePalette {
    pub fn generate(shape: SpriteShape, count: usize, color_mode: ColorMode) -> Self {
        let sprites = (0..count.max(1))
            .map(|index| {
                generate_sprite(&SpriteParams {
                    shape,
                    index,
                    color_mode,
                })
            })
            .collect();
        Self {
            sprites,
            color_mode,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Sprite> {
        self.sprites.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    #[inline]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }
}
