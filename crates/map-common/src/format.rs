//! Coordinate formats and map styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MapError;

/// Record grammar followed by a coordinate list, decided from its first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateFormat {
    /// `lat,long`
    NoVoucher,
    /// `lat,long,flag` where flag is `0` (anecdotal) or `1` (vouchered)
    Voucher,
    /// Neither grammar matched.
    Invalid,
}

impl CoordinateFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateFormat::NoVoucher => "no_voucher",
            CoordinateFormat::Voucher => "voucher",
            CoordinateFormat::Invalid => "invalid",
        }
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map style requested through the `maptype` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    Grid,
    Plain,
    Web,
}

impl MapStyle {
    /// All recognized styles, in the order they appear on the entry form.
    pub const ALL: [MapStyle; 3] = [MapStyle::Grid, MapStyle::Plain, MapStyle::Web];

    /// Form value and file name component for this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::Grid => "grid",
            MapStyle::Plain => "plain",
            MapStyle::Web => "web",
        }
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapStyle {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(MapStyle::Grid),
            "plain" => Ok(MapStyle::Plain),
            "web" => Ok(MapStyle::Web),
            other => Err(MapError::UnknownStyle(other.to_string())),
        }
    }
}
