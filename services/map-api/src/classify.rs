//! Coordinate format classification.
//!
//! Decides which record grammar a coordinate list follows. The default
//! strategy looks at the first line only and assumes the rest of the list
//! follows suit; [`EveryLineClassifier`] checks every line instead.

use map_common::CoordinateFormat;
use once_cell::sync::Lazy;
use regex::Regex;

/// `lat,long,flag`: 2 latitude digits, 3 longitude digits, up to 10
/// decimals each, flag 0 or 1. ASCII digits only.
static VOUCHER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?[0-9]{2}(\.[0-9]{0,10})?,[0-9]{3}(\.[0-9]{0,10})?,[01]$")
        .expect("valid voucher pattern")
});

/// `lat,long` with the same digit rules as the voucher grammar.
static NO_VOUCHER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?[0-9]{2}(\.[0-9]{0,10})?,[0-9]{3}(\.[0-9]{0,10})?$")
        .expect("valid no-voucher pattern")
});

/// Classify a single coordinate line.
///
/// Both grammars are tested independently; the voucher grammar wins when it
/// matches.
pub fn classify(line: &str) -> CoordinateFormat {
    let line = line.trim();
    let voucher = VOUCHER_PATTERN.is_match(line);
    let no_voucher = NO_VOUCHER_PATTERN.is_match(line);

    if voucher {
        CoordinateFormat::Voucher
    } else if no_voucher {
        CoordinateFormat::NoVoucher
    } else {
        CoordinateFormat::Invalid
    }
}

/// First non-blank line of `coordinates`, trimmed. Empty if there is none.
pub fn first_line(coordinates: &str) -> &str {
    coordinates
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Outcome of classifying a whole coordinate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub format: CoordinateFormat,
    /// The line the decision rests on: the first line when accepted, the
    /// offending line when rejected.
    pub line: String,
}

/// Strategy for classifying a coordinate list.
pub trait CoordinateClassifier: Send + Sync {
    fn classify(&self, coordinates: &str) -> Classification;
}

/// Classify from the first line only. Later lines are not validated.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLineClassifier;

impl CoordinateClassifier for FirstLineClassifier {
    fn classify(&self, coordinates: &str) -> Classification {
        let line = first_line(coordinates);
        Classification {
            format: classify(line),
            line: line.to_string(),
        }
    }
}

/// Require every non-blank line to follow the first line's grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct EveryLineClassifier;

impl CoordinateClassifier for EveryLineClassifier {
    fn classify(&self, coordinates: &str) -> Classification {
        let first = FirstLineClassifier.classify(coordinates);
        if first.format == CoordinateFormat::Invalid {
            return first;
        }

        let offending = coordinates
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .find(|line| classify(line) != first.format);

        match offending {
            Some(line) => Classification {
                format: CoordinateFormat::Invalid,
                line: line.to_string(),
            },
            None => first,
        }
    }
}
