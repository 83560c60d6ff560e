//! SVG distribution map rendering.
//!
//! Implements the four map types drawn from a coordinate record list:
//! - Grid map (occupied grid cells)
//! - Voucher grid map (filled or hollow markers per cell)
//! - Exact map (one marker per record)
//! - Web map (compact, scalable exact map for inline display)

pub mod engine;
pub mod exact;
pub mod grid;
pub mod records;
pub mod svg;
pub mod web;

pub use engine::{MapConfig, MapRenderer, TasmapRenderer};
pub use records::{Record, RecordList, RecordParseError};
