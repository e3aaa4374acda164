use super::config::FieldConfig;
use super::constants::VOLUME_HALF_EXTENT;
use super::projection::Projected;
use glam::Vec3;
use instant::Instant;
use rand::Rng;

/// One falling (or rising) decorative object.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub size: f32,
    /// Added to `position.y` every frame; negative values rise.
    pub speed: f32,
    /// Spin in degrees.
    pub angle: f32,
    pub rotation_speed: f32,
    /// Index into the field's sprite palette.
    pub sprite: usize,
    pub popped: bool,
    pub pop_time: Option<Instant>,
    pub pop_scale: f32,
    /// Last projection computed by the field; hit-testing reads this.
    pub projected: Option<Projected>,
}

impl Particle {
    pub fn spawn<R: Rng>(rng: &mut R, config: &FieldConfig, palette_len: usize) -> Self {
        Self {
            position: Vec3::new(
                volume_coord(rng),
                volume_coord(rng),
                volume_coord(rng),
            ),
            size: sample_range(rng, config.size_range),
            speed: sample_range(rng, config.speed_range),
            angle: rng.gen::<f32>() * 360.0,
            rotation_speed: sample_range(rng, config.rotation_speed_range),
            sprite: rng.gen_range(0..palette_len.max(1)),
            popped: false,
            pop_time: None,
            pop_scale: 1.0,
            projected: None,
        }
    }

    /// Advance one frame of motion and spin.
    #[inline]
    pub fn advance(&mut self) {
        self.position.y += self.speed;
        self.angle += self.rotation_speed;
    }

    #[inline]
    pub fn is_out_of_bounds(&self) -> bool {
        self.position.y > VOLUME_HALF_EXTENT
    }

    /// Send the particle back to the top of the volume at a fresh x/z.
    pub fn recycle<R: Rng>(&mut self, rng: &mut R) {
        self.position.y = -VOLUME_HALF_EXTENT;
        self.position.x = volume_coord(rng);
        self.position.z = volume_coord(rng);
    }

    pub fn pop(&mut self, now: Instant) {
        self.popped = true;
        self.pop_time = Some(now);
        self.pop_scale = 1.0;
    }

    pub fn clear_pop(&mut self) {
        self.popped = false;
        self.pop_time = None;
        self.pop_scale = 1.0;
    }
}

#[inline]
fn volume_coord<R: Rng>(rng: &mut R) -> f32 {
    rng.gen::<f32>() * 2.0 * VOLUME_HALF_EXTENT - VOLUME_HALF_EXTENT
}

/// Uniform sample in `[min, max)`; a degenerate range yields `min`.
#[inline]
pub fn sample_range<R: Rng>(rng: &mut R, [min, max]: [f32; 2]) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}
