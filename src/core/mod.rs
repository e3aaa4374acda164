pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod orbit;
pub mod particle;
pub mod projection;
pub mod sprite;
pub mod stage;
pub mod surface;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use orbit::*;
pub use particle::*;
pub use projection::*;
pub use sprite::*;
pub use stage::*;
pub use surface::*;
