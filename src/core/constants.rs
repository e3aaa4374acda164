/// Engine tuning constants.
///
/// World units are arbitrary; the particle volume is a cube centred on the
/// origin and the orbit camera always looks at the origin.
use std::time::Duration;

// Particle volume (half the cube side)
pub const VOLUME_HALF_EXTENT: f32 = 1000.0;

// Orbit camera
pub const DISTANCE_DEFAULT: f32 = 1000.0;
pub const DISTANCE_MIN: f32 = 500.0;
pub const DISTANCE_MAX: f32 = 2000.0;
pub const DRAG_DEGREES_PER_PX: f32 = 0.2; // rotation per pointer pixel
pub const WHEEL_DISTANCE_PER_DELTA: f32 = 0.5; // zoom per wheel delta unit

// Pop animation (poppable variant)
pub const POP_DURATION: Duration = Duration::from_millis(300);
pub const POP_SCALE_MAX: f32 = 3.0; // sprite zoom at the end of the pop

// Background vignette
pub const VIGNETTE_INNER_RGBA: &str = "rgba(0,0,0,0.1)";
pub const VIGNETTE_OUTER_RGBA: &str = "rgba(0,0,0,0)";

// Default sprite palette size
pub const DEFAULT_SPRITE_COUNT: usize = 3;
