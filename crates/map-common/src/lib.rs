//! Common types shared by the map rendering crates and the map service.

pub mod bbox;
pub mod error;
pub mod format;
pub mod map;

pub use bbox::BoundingBox;
pub use error::{MapError, MapResult};
pub use format::{CoordinateFormat, MapStyle};
pub use map::RenderedMap;
