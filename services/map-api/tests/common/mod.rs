//! Common test utilities for map-api tests
//!
//! Provides a rendering engine double that records which entry point was
//! called, and helpers for building application state around it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use map_api::classify::{CoordinateClassifier, FirstLineClassifier};
use map_api::state::AppState;
use renderer::{MapRenderer, RecordList};

/// Entry points called on a [`RecordingRenderer`], in call order.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, entry_point: &'static str) {
        self.0.lock().unwrap().push(entry_point);
    }
}

/// Renderer that returns a tiny SVG naming the entry point and record
/// voucher flags, and logs every call.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub log: CallLog,
}

impl RecordingRenderer {
    fn draw(&self, entry_point: &'static str, records: &RecordList) -> String {
        self.log.push(entry_point);
        let flags: Vec<String> = records
            .records
            .iter()
            .map(|r| match r.vouchered {
                Some(true) => "filled".to_string(),
                Some(false) => "hollow".to_string(),
                None => "plain".to_string(),
            })
            .collect();
        format!(
            "<svg data-entry=\"{}\" data-records=\"{}\" data-markers=\"{}\"/>",
            entry_point,
            records.len(),
            flags.join(" ")
        )
    }
}

impl MapRenderer for RecordingRenderer {
    fn voucher_map(&self, records: &RecordList) -> String {
        self.draw("voucher_map", records)
    }

    fn grid_map(&self, records: &RecordList) -> String {
        self.draw("grid_map", records)
    }

    fn exact_map(&self, records: &RecordList) -> String {
        self.draw("exact_map", records)
    }

    fn web_map(&self, records: &RecordList) -> String {
        self.draw("web_map", records)
    }
}

/// State with a recording renderer and the given classifier.
pub fn recording_state_with(classifier: Box<dyn CoordinateClassifier>) -> (Arc<AppState>, CallLog) {
    let renderer = RecordingRenderer::default();
    let log = renderer.log.clone();
    let state = AppState::with_parts(Box::new(renderer), classifier);
    (Arc::new(state), log)
}

/// State with a recording renderer and first-line classification.
pub fn recording_state() -> (Arc<AppState>, CallLog) {
    recording_state_with(Box::new(FirstLineClassifier))
}
