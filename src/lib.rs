//! Pseudo-3D falling hearts, balloons and blossoms for the greeting card.
//!
//! `core` is the platform-free engine (simulation, orbit camera, projection,
//! sprites, hit-testing) and builds on every target. The remaining modules
//! bind it to a Canvas 2D element in the browser.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod layer;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use layer::ParticleLayer;
