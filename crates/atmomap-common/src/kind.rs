//! Measurement layer kinds.

use serde::{Deserialize, Serialize};

/// The measurement layer selected for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Ionospheric total electron content.
    Tec,
    /// Nitrogen dioxide column density.
    No2,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Tec, Kind::No2];

    /// Path segment used in resource URLs.
    pub fn as_path(&self) -> &'static str {
        match self {
            Kind::Tec => "tec",
            Kind::No2 => "no2",
        }
    }

    /// Short display label for legends.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Tec => "TEC",
            Kind::No2 => "NO2",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path())
    }
}

impl std::str::FromStr for Kind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tec" => Ok(Kind::Tec),
            "no2" => Ok(Kind::No2),
            _ => Err(KindParseError(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown layer kind: {0}")]
pub struct KindParseError(pub String);
