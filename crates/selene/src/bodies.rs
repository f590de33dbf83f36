//! Celestial bodies and the position records supplied by the ephemeris service.

use crate::zodiac::{degree_in_sign, normalize_degrees, ZodiacSign};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown body: {0}")]
pub struct ParseBodyError(pub String);

/// Errors raised while building a position record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("House must be in 1..=12, got {house} for {name}")]
    InvalidHouse { name: String, house: u8 },
    #[error("Longitude for {name} is not a finite number: {longitude}")]
    InvalidLongitude { name: String, longitude: f64 },
}

/// Planets and chart points the orb tables know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    NorthNode,
    Ascendant,
    Midheaven,
}

impl Body {
    pub const ALL: [Body; 14] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Chiron,
        Body::NorthNode,
        Body::Ascendant,
        Body::Midheaven,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Chiron => "Chiron",
            Body::NorthNode => "North Node",
            Body::Ascendant => "Ascendant",
            Body::Midheaven => "Midheaven",
        }
    }

    /// Chart points are derived from the horizon rather than observed.
    pub fn is_chart_point(self) -> bool {
        matches!(self, Body::Ascendant | Body::Midheaven)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase, separator-free form used for name lookups ("North Node" -> "northnode")
fn lookup_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

lazy_static::lazy_static! {
    static ref BODY_NAMES: HashMap<String, Body> = {
        let mut names: HashMap<String, Body> = Body::ALL
            .iter()
            .map(|body| (lookup_key(body.name()), *body))
            .collect();
        for (alias, body) in [
            ("asc", Body::Ascendant),
            ("mc", Body::Midheaven),
            ("node", Body::NorthNode),
            ("truenode", Body::NorthNode),
        ] {
            names.insert(alias.to_string(), body);
        }
        names
    };
}

impl FromStr for Body {
    type Err = ParseBodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BODY_NAMES
            .get(&lookup_key(s))
            .copied()
            .ok_or_else(|| ParseBodyError(s.to_string()))
    }
}

/// Wire shape of a position record as returned by the ephemeris endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    pub name: String,
    pub longitude_degrees: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<ZodiacSign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_degree: Option<f64>,
    #[serde(default)]
    pub is_retrograde: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
}

/// A body's position in a chart.
///
/// Values are immutable once built: the longitude is normalized and the sign
/// and in-sign degree are derived from it, never taken from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyRecord", into = "BodyRecord")]
pub struct CelestialBody {
    name: String,
    longitude: f64,
    sign: ZodiacSign,
    sign_degree: f64,
    is_retrograde: bool,
    house: Option<u8>,
}

impl CelestialBody {
    pub fn new(name: impl Into<String>, longitude: f64, is_retrograde: bool) -> Self {
        let longitude = normalize_degrees(longitude);
        Self {
            name: name.into(),
            longitude,
            sign: ZodiacSign::from_longitude(longitude),
            sign_degree: degree_in_sign(longitude),
            is_retrograde,
            house: None,
        }
    }

    /// Like [`CelestialBody::new`] but rejects NaN and infinite longitudes.
    pub fn try_new(
        name: impl Into<String>,
        longitude: f64,
        is_retrograde: bool,
    ) -> Result<Self, BodyError> {
        let name = name.into();
        if !longitude.is_finite() {
            return Err(BodyError::InvalidLongitude { name, longitude });
        }
        Ok(Self::new(name, longitude, is_retrograde))
    }

    pub fn with_house(mut self, house: u8) -> Result<Self, BodyError> {
        if !(1..=12).contains(&house) {
            return Err(BodyError::InvalidHouse {
                name: self.name,
                house,
            });
        }
        self.house = Some(house);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> Option<Body> {
        self.name.parse().ok()
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn sign(&self) -> ZodiacSign {
        self.sign
    }

    pub fn sign_degree(&self) -> f64 {
        self.sign_degree
    }

    pub fn is_retrograde(&self) -> bool {
        self.is_retrograde
    }

    pub fn house(&self) -> Option<u8> {
        self.house
    }
}

impl TryFrom<BodyRecord> for CelestialBody {
    type Error = BodyError;

    fn try_from(record: BodyRecord) -> Result<Self, Self::Error> {
        let body = CelestialBody::try_new(record.name, record.longitude_degrees, record.is_retrograde)?;
        if let Some(claimed) = record.sign {
            if claimed != body.sign {
                log::warn!(
                    "{}: record says {} but {:.2}° is in {}; using {}",
                    body.name,
                    claimed,
                    body.longitude,
                    body.sign,
                    body.sign
                );
            }
        }
        match record.house {
            Some(house) => body.with_house(house),
            None => Ok(body),
        }
    }
}

impl From<CelestialBody> for BodyRecord {
    fn from(body: CelestialBody) -> Self {
        BodyRecord {
            name: body.name,
            longitude_degrees: body.longitude,
            sign: Some(body.sign),
            sign_degree: Some(body.sign_degree),
            is_retrograde: body.is_retrograde,
            house: body.house,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BodyList {
    Bare(Vec<CelestialBody>),
    Wrapped { bodies: Vec<CelestialBody> },
}

/// Parse a JSON array of position records, or an object with a `bodies` array.
pub fn parse_bodies_json(json: &str) -> Result<Vec<CelestialBody>, serde_json::Error> {
    let list: BodyList = serde_json::from_str(json)?;
    Ok(match list {
        BodyList::Bare(bodies) | BodyList::Wrapped { bodies } => bodies,
    })
}
