use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during aspect calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AspectError {
    #[error("Unknown body: {0}. No orb is defined for it and no fallback orb is configured")]
    UnknownBody(String),
    #[error("Invalid orb for {body}: {orb}. Orbs must be finite and non-negative")]
    InvalidOrb { body: String, orb: f64 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown aspect: {0}")]
pub struct ParseAspectError(pub String);

/// Named angular relationship between two longitudes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    Quincunx,
}

impl AspectKind {
    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
            AspectKind::Quincunx => "quincunx",
        }
    }

    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Quincunx => 150.0,
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AspectKind {
    type Err = ParseAspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ASPECT_DEFINITIONS
            .iter()
            .map(|def| def.kind)
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseAspectError(s.to_string()))
    }
}

impl Serialize for AspectKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AspectKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub angle: f64,
}

/// Aspects in match order. The first definition within orb wins.
pub const ASPECT_DEFINITIONS: [AspectDefinition; 6] = [
    AspectDefinition { kind: AspectKind::Conjunction, angle: 0.0 },
    AspectDefinition { kind: AspectKind::Sextile, angle: 60.0 },
    AspectDefinition { kind: AspectKind::Square, angle: 90.0 },
    AspectDefinition { kind: AspectKind::Trine, angle: 120.0 },
    AspectDefinition { kind: AspectKind::Opposition, angle: 180.0 },
    AspectDefinition { kind: AspectKind::Quincunx, angle: 150.0 },
];

/// An active aspect between two longitudes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectMatch {
    /// Aspect type: "conjunction", "trine", etc.
    #[serde(rename = "aspectType")]
    pub kind: AspectKind,
    /// Exact angle for this aspect (0, 60, 90, 120, 150, 180)
    pub exact_angle: f64,
    /// Deviation from the exact angle, rounded to one decimal
    pub orb: f64,
}

impl AspectMatch {
    /// Orb reported by the legacy table encoding when no aspect was found.
    pub const NOT_FOUND_ORB: f64 = 100.0;

    pub fn is_exact(&self) -> bool {
        self.orb == 0.0
    }

    /// `(aspectType, orb)` in the legacy encoding, `("", 100.0)` when none matched.
    pub fn legacy_pair(found: Option<&AspectMatch>) -> (&'static str, f64) {
        match found {
            Some(aspect) => (aspect.kind.name(), aspect.orb),
            None => ("", Self::NOT_FOUND_ORB),
        }
    }
}

/// An aspect between two named bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectPair {
    pub from: String,
    pub to: String,
    pub aspect: AspectMatch,
}
