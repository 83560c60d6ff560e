//! Coordinate record parsing.
//!
//! A record list is built from newline-separated text, one record per line,
//! in one of two layouts:
//! - `lat,long`
//! - `lat,long,flag` where flag `1` marks a vouchered specimen and `0` an
//!   anecdotal sighting
//!
//! Blank lines are ignored. Lines that fail to parse are skipped and counted
//! so the caller can still draw the records that did parse.

use thiserror::Error;
use tracing::warn;

/// A single parsed coordinate record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Decimal degrees, negative south of the equator.
    pub latitude: f64,
    /// Decimal degrees, negative west of Greenwich.
    pub longitude: f64,
    /// `Some(true)` for vouchered specimens, `Some(false)` for anecdotal
    /// records, `None` when the list carries no voucher information.
    pub vouchered: Option<bool>,
}

impl Record {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            vouchered: None,
        }
    }

    pub fn with_voucher(latitude: f64, longitude: f64, vouchered: bool) -> Self {
        Self {
            latitude,
            longitude,
            vouchered: Some(vouchered),
        }
    }

    /// True only for records explicitly flagged as vouchered.
    pub fn is_vouchered(&self) -> bool {
        self.vouchered == Some(true)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RecordParseError {
    #[error("Expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid voucher flag '{0}', expected 0 or 1")]
    InvalidVoucherFlag(String),
}

/// Ordered list of coordinate records for one taxon.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordList {
    pub taxon_name: String,
    pub records: Vec<Record>,
    /// Number of non-blank lines that could not be parsed.
    pub skipped: usize,
}

impl RecordList {
    /// Build a list from `lat,long` lines.
    pub fn new(raw: &str, taxon_name: &str) -> Self {
        Self::build(raw, taxon_name, parse_plain_line)
    }

    /// Build a list from `lat,long,flag` lines.
    pub fn new_vouchered(raw: &str, taxon_name: &str) -> Self {
        Self::build(raw, taxon_name, parse_voucher_line)
    }

    fn build(
        raw: &str,
        taxon_name: &str,
        parse: fn(&str) -> Result<Record, RecordParseError>,
    ) -> Self {
        let mut records = Vec::new();
        let mut skipped = 0;

        for (index, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        line_number = index + 1,
                        line = %line,
                        error = %e,
                        "Skipping coordinate record"
                    );
                    skipped += 1;
                }
            }
        }

        Self {
            taxon_name: taxon_name.to_string(),
            records,
            skipped,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when every record carries a voucher flag.
    pub fn has_voucher_info(&self) -> bool {
        !self.records.is_empty() && self.records.iter().all(|r| r.vouchered.is_some())
    }
}

/// Parse a `lat,long` line.
pub fn parse_plain_line(line: &str) -> Result<Record, RecordParseError> {
    let fields = split_fields(line, 2)?;
    Ok(Record::new(parse_degrees(fields[0])?, parse_degrees(fields[1])?))
}

/// Parse a `lat,long,flag` line.
pub fn parse_voucher_line(line: &str) -> Result<Record, RecordParseError> {
    let fields = split_fields(line, 3)?;
    let vouchered = match fields[2] {
        "1" => true,
        "0" => false,
        other => return Err(RecordParseError::InvalidVoucherFlag(other.to_string())),
    };
    Ok(Record::with_voucher(
        parse_degrees(fields[0])?,
        parse_degrees(fields[1])?,
        vouchered,
    ))
}

fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, RecordParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(RecordParseError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_degrees(field: &str) -> Result<f64, RecordParseError> {
    field
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RecordParseError::InvalidNumber(field.to_string()))
}
