//! HTTP request handlers.
//!
//! This module is organized into submodules:
//! - `map`: data entry form, map display and stylesheet
//! - `download`: cached map as a file attachment
//! - `metrics`: health check, JSON status and Prometheus metrics

pub mod download;
pub mod map;
pub mod metrics;

pub use download::map_file_handler;
pub use map::{data_entry_handler, map_display_handler, map_redirect_handler, style_handler};
pub use metrics::{health_handler, metrics_handler, status_handler, StatusResponse};
