use super::config::{ColorMode, FieldConfig, SurfaceSize};
use super::constants::{POP_DURATION, POP_SCALE_MAX};
use super::error::Result;
use super::orbit::OrbitState;
use super::particle::Particle;
use super::projection::{project, ViewRotation};
use super::sprite::SpritePalette;
use super::surface::{DrawSurface, SpriteDraw, Vignette};
use glam::Vec2;
use instant::Instant;
use rand::prelude::*;
use std::time::Duration;

/// Fixed-population particle simulation with an orbit camera.
///
/// `update` advances motion, pop animations and projections; `render`
/// replays the resulting draw list onto a surface. Input handlers only
/// mutate state, so they can arrive at any point between frames.
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    orbit: OrbitState,
    palette: SpritePalette,
    size: SurfaceSize,
    rng: StdRng,
    draws: Vec<SpriteDraw>,
}

impl ParticleField {
    pub fn new(config: FieldConfig, size: SurfaceSize, seed: u64) -> Self {
        let palette = SpritePalette::generate(config.shape, config.palette_len(), config.color_mode);
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..config.count)
            .map(|_| Particle::spawn(&mut rng, &config, palette.len()))
            .collect::<Vec<_>>();
        let mut field = Self {
            draws: Vec::with_capacity(particles.len()),
            config,
            particles,
            orbit: OrbitState::default(),
            palette,
            size,
            rng,
        };
        field.project_all();
        log::debug!(
            "[field] {} particles, {} sprites ({:?})",
            field.particles.len(),
            field.palette.len(),
            field.config.color_mode
        );
        field
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to particle state; the population itself stays fixed.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn orbit(&self) -> &OrbitState {
        &self.orbit
    }

    #[inline]
    pub fn palette(&self) -> &SpritePalette {
        &self.palette
    }

    #[inline]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Sprites queued by the last `update`, in particle order.
    #[inline]
    pub fn draw_list(&self) -> &[SpriteDraw] {
        &self.draws
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// Rebuild the palette in another colour mode. Sprite indices stay
    /// valid because the palette length does not change.
    pub fn set_color_mode(&mut self, mode: ColorMode) -> bool {
        if self.palette.color_mode() == mode {
            return false;
        }
        self.config.color_mode = mode;
        self.palette = SpritePalette::generate(self.config.shape, self.config.palette_len(), mode);
        true
    }

    pub fn update(&mut self, now: Instant) {
        let rotation = self.orbit.view_rotation();
        let distance = self.orbit.distance();
        self.draws.clear();

        for p in self.particles.iter_mut() {
            if p.popped {
                let elapsed = p
                    .pop_time
                    .map(|t| elapsed_since(now, t))
                    .unwrap_or(POP_DURATION);
                if elapsed >= POP_DURATION {
                    p.clear_pop();
                    p.recycle(&mut self.rng);
                    p.projected = Some(project(rotation.apply(p.position), p.size, distance, self.size));
                    continue;
                }
                let t = elapsed.as_secs_f32() / POP_DURATION.as_secs_f32();
                p.pop_scale = 1.0 + (POP_SCALE_MAX - 1.0) * t;
                let proj = project(rotation.apply(p.position), p.size, distance, self.size);
                p.projected = Some(proj);
                if proj.is_visible() {
                    self.draws.push(SpriteDraw {
                        sprite: p.sprite,
                        x: proj.center.x,
                        y: proj.center.y,
                        size: proj.size,
                        angle: 0.0,
                        alpha: (1.0 - t) * proj.scale,
                        zoom: p.pop_scale,
                    });
                }
                continue;
            }

            p.advance();
            if p.is_out_of_bounds() {
                p.recycle(&mut self.rng);
            }
            let proj = project(rotation.apply(p.position), p.size, distance, self.size);
            p.projected = Some(proj);
            if proj.is_visible() {
                self.draws.push(SpriteDraw {
                    sprite: p.sprite,
                    x: proj.center.x,
                    y: proj.center.y,
                    size: proj.size,
                    angle: p.angle,
                    alpha: proj.scale,
                    zoom: 1.0,
                });
            }
        }
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.clear(self.size)?;
        surface.fill_vignette(self.size, &Vignette::for_surface(self.size))?;
        for draw in &self.draws {
            surface.draw_sprite(draw)?;
        }
        Ok(())
    }

    /// One frame: simulate, then draw.
    pub fn step<S: DrawSurface + ?Sized>(&mut self, now: Instant, surface: &mut S) -> Result<()> {
        self.update(now);
        self.render(surface)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.orbit.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.orbit.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.orbit.pointer_release();
    }

    pub fn pointer_leave(&mut self) {
        self.orbit.pointer_release();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.orbit.wheel(delta_y);
    }

    /// Pop the first live particle (in list order) whose last projected box
    /// contains the point. Returns its index, or `None` on a miss or when the
    /// field is not poppable.
    pub fn click(&mut self, x: f32, y: f32, now: Instant) -> Option<usize> {
        if !self.config.poppable {
            return None;
        }
        let point = Vec2::new(x, y);
        let hit = self.particles.iter().position(|p| {
            !p.popped
                && p.projected
                    .is_some_and(|proj| proj.is_visible() && proj.contains(point))
        })?;
        self.particles[hit].pop(now);
        log::debug!("[click] popped particle {} at ({:.0},{:.0})", hit, x, y);
        Some(hit)
    }

    fn project_all(&mut self) {
        let rotation: ViewRotation = self.orbit.view_rotation();
        let distance = self.orbit.distance();
        for p in self.particles.iter_mut() {
            p.projected = Some(project(rotation.apply(p.position), p.size, distance, self.size));
        }
    }
}

#[inline]
fn elapsed_since(now: Instant, earlier: Instant) -> Duration {
    if now > earlier {
        now - earlier
    } else {
        Duration::ZERO
    }
}
