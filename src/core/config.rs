//! Field configuration: surface size, per-variant presets and the JSON
//! override format accepted from the host page.

use super::constants::DEFAULT_SPRITE_COUNT;
use super::error::{FieldError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Drawing-surface size in pixels. Never smaller than 1×1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Build a size from host-reported dimensions, clamping anything
    /// below one pixel (including negatives) to 1.
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width: width.clamp(1, u32::MAX as i64) as u32,
            height: height.clamp(1, u32::MAX as i64) as u32,
        }
    }

    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Neutral,
    Tinted,
}

impl ColorMode {
    /// The page tints sprites only while the soundtrack is audible.
    pub fn for_muted(muted: bool) -> Self {
        if muted {
            ColorMode::Neutral
        } else {
            ColorMode::Tinted
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteShape {
    Heart,
    Balloon,
    Blossom,
}

/// Everything needed to build a [`ParticleField`](super::ParticleField).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub count: usize,
    pub size_range: [f32; 2],
    pub speed_range: [f32; 2],
    pub rotation_speed_range: [f32; 2],
    pub sprite_count: usize,
    pub poppable: bool,
    pub color_mode: ColorMode,
    pub shape: SpriteShape,
}

impl FieldConfig {
    /// Apply a JSON object of overrides on top of `base`. Keys the config
    /// does not know are ignored.
    pub fn from_json(json: &str, base: &FieldConfig) -> Result<FieldConfig> {
        let overrides: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(base)?;
        if let Some(fields) = merged.as_object_mut() {
            fields.extend(overrides);
        }
        Ok(serde_json::from_value(merged)?)
    }

    /// Palette size actually used; a field always has at least one sprite.
    #[inline]
    pub fn palette_len(&self) -> usize {
        self.sprite_count.max(1)
    }
}

/// The three falling-object layers of the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Hearts,
    Balloons,
    Blossoms,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Hearts => "hearts",
            Variant::Balloons => "balloons",
            Variant::Blossoms => "blossoms",
        }
    }

    pub fn config(&self) -> FieldConfig {
        match self {
            Variant::Hearts => FieldConfig {
                count: 50,
                size_range: [10.0, 20.0],
                speed_range: [-1.0, 1.0],
                rotation_speed_range: [-0.75, -0.25],
                sprite_count: DEFAULT_SPRITE_COUNT,
                poppable: false,
                color_mode: ColorMode::Neutral,
                shape: SpriteShape::Heart,
            },
            // Fewer, larger and slower than hearts; the only poppable layer.
            Variant::Balloons => FieldConfig {
                count: 30,
                size_range: [40.0, 70.0],
                speed_range: [-0.5, 0.5],
                rotation_speed_range: [-0.3, -0.1],
                sprite_count: DEFAULT_SPRITE_COUNT,
                poppable: true,
                color_mode: ColorMode::Neutral,
                shape: SpriteShape::Balloon,
            },
            Variant::Blossoms => FieldConfig {
                count: 40,
                size_range: [12.0, 24.0],
                speed_range: [-0.8, 0.8],
                rotation_speed_range: [-0.6, -0.2],
                sprite_count: DEFAULT_SPRITE_COUNT,
                poppable: false,
                color_mode: ColorMode::Tinted,
                shape: SpriteShape::Blossom,
            },
        }
    }
}

impl FromStr for Variant {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hearts" | "heart" => Ok(Variant::Hearts),
            "balloons" | "balloon" => Ok(Variant::Balloons),
            "blossoms" | "blossom" | "cherry-blossoms" => Ok(Variant::Blossoms),
            _ => Err(FieldError::UnknownVariant(s.to_string())),
        }
    }
}
