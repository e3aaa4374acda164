//! A field bound to its drawing surface, plus the start/stop lifecycle the
//! host drives. Every host callback goes through here, so once the stage
//! is stopped nothing reaches the field or the surface.

use super::config::{ColorMode, SurfaceSize};
use super::error::Result;
use super::field::ParticleField;
use super::surface::DrawSurface;
use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Stopped,
}

pub struct Stage<S: DrawSurface> {
    field: ParticleField,
    surface: S,
    state: RunState,
    frames: u64,
    failed_frames: u64,
}

impl<S: DrawSurface> Stage<S> {
    pub fn new(field: ParticleField, mut surface: S) -> Result<Self> {
        surface.resize(field.size())?;
        surface.set_palette(field.palette())?;
        Ok(Self {
            field,
            surface,
            state: RunState::Idle,
            frames: 0,
            failed_frames: 0,
        })
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Frames rendered successfully and frames skipped after a draw error.
    #[inline]
    pub fn frame_counts(&self) -> (u64, u64) {
        (self.frames, self.failed_frames)
    }

    /// Returns `false` if already running. A stopped stage may restart; the
    /// surface is brought back in line with any resize or palette change
    /// that arrived while it was stopped.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        if self.state == RunState::Stopped {
            if let Err(e) = self.sync_surface() {
                log::warn!("[stage] surface resync failed: {}", e);
            }
        }
        self.state = RunState::Running;
        true
    }

    /// Returns `true` only for the call that actually tears down.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.field.pointer_up();
        self.state = RunState::Stopped;
        true
    }

    /// Run one frame. A failing frame is logged and skipped; the loop goes
    /// on. Returns whether a frame was attempted.
    pub fn frame(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.field.step(now, &mut self.surface) {
            Ok(()) => self.frames += 1,
            Err(e) => {
                self.failed_frames += 1;
                log::warn!("[frame] skipped frame {}: {}", self.frames + self.failed_frames, e);
            }
        }
        true
    }

    pub fn resize(&mut self, width: i64, height: i64) {
        let size = SurfaceSize::new(width, height);
        self.field.resize(size);
        if self.state == RunState::Stopped {
            return;
        }
        if let Err(e) = self.surface.resize(size) {
            log::warn!("[stage] resize to {}x{} failed: {}", size.width, size.height, e);
        }
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        if !self.field.set_color_mode(mode) || self.state == RunState::Stopped {
            return;
        }
        log::info!("[stage] palette switched to {:?}", mode);
        if let Err(e) = self.surface.set_palette(self.field.palette()) {
            log::warn!("[stage] palette upload failed: {}", e);
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.when_running(|f| f.pointer_down(x, y))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.when_running(|f| f.pointer_move(x, y))
    }

    pub fn pointer_up(&mut self) -> bool {
        self.when_running(ParticleField::pointer_up)
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.when_running(ParticleField::pointer_leave)
    }

    pub fn wheel(&mut self, delta_y: f32) -> bool {
        self.when_running(|f| f.wheel(delta_y))
    }

    pub fn click(&mut self, x: f32, y: f32, now: Instant) -> Option<usize> {
        if !self.is_running() {
            return None;
        }
        self.field.click(x, y, now)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.field.orbit().is_dragging
    }

    fn when_running(&mut self, f: impl FnOnce(&mut ParticleField)) -> bool {
        if !self.is_running() {
            return false;
        }
        f(&mut self.field);
        true
    }

    fn sync_surface(&mut self) -> Result<()> {
        self.surface.resize(self.field.size())?;
        self.surface.set_palette(self.field.palette())
    }
}
