pub mod constants;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod hub;
pub mod listener;
pub mod parallax;
pub mod particles;
pub mod tracker;
pub mod visibility;

pub use constants::*;
pub use direction::*;
pub use error::ConfigError;
pub use geometry::*;
pub use hub::*;
pub use listener::*;
pub use parallax::*;
pub use particles::*;
pub use tracker::*;
pub use visibility::*;
