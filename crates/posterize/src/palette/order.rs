use std::fmt;
use std::str::FromStr;

use crate::api::ParseOptionError;

/// How palette entries are ordered.
///
/// The order is part of the result: the same clustering yields different
/// grid labels under different orders, so callers that compare boards
/// across runs should pin it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PaletteOrder {
    /// Entry `i` is the centroid of cluster `i`.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "cluster"))]
    ClusterOrder,
    /// Ascending by packed `0xRRGGBB`; equal colors keep cluster order.
    #[cfg_attr(feature = "serde", serde(rename = "value"))]
    ByValue,
}

impl fmt::Display for PaletteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaletteOrder::ClusterOrder => "cluster",
            PaletteOrder::ByValue => "value",
        })
    }
}

impl FromStr for PaletteOrder {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cluster" => Ok(PaletteOrder::ClusterOrder),
            "value" => Ok(PaletteOrder::ByValue),
            _ => Err(ParseOptionError {
                kind: "palette order",
                value: s.to_string(),
                expected: "cluster, value",
            }),
        }
    }
}
