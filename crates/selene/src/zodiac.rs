//! The zodiac as a fixed 12-sign ring.
//!
//! Sign order is significant: house offsets and sign lookups are computed
//! modulo 12 from Aries. Longitudes are always brought into [0, 360) before
//! they touch the ring.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown sign: {0}")]
pub struct ParseSignError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Position on the ring, Aries = 0 through Pisces = 11.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index`, wrapping around the ring.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Sign containing the given ecliptic longitude.
    pub fn from_longitude(longitude: f64) -> Self {
        let lon = normalize_degrees(longitude);
        Self::from_index((lon / SIGN_SPAN) as usize)
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Planetary ruler. Modern rulerships give Scorpio, Aquarius and Pisces
    /// to the outer planets.
    pub fn ruler(self, modern: bool) -> &'static str {
        const TRADITIONAL_RULERS: [&str; 12] = [
            "Mars",    // Aries
            "Venus",   // Taurus
            "Mercury", // Gemini
            "Moon",    // Cancer
            "Sun",     // Leo
            "Mercury", // Virgo
            "Venus",   // Libra
            "Mars",    // Scorpio
            "Jupiter", // Sagittarius
            "Saturn",  // Capricorn
            "Saturn",  // Aquarius
            "Jupiter", // Pisces
        ];
        if modern {
            match self {
                ZodiacSign::Scorpio => return "Pluto",
                ZodiacSign::Aquarius => return "Uranus",
                ZodiacSign::Pisces => return "Neptune",
                _ => {}
            }
        }
        TRADITIONAL_RULERS[self.index()]
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = ParseSignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSignError(s.to_string()))
    }
}

impl Serialize for ZodiacSign {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ZodiacSign {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // -1e-15 % 360 + 360 rounds up to exactly 360
    if normalized >= 360.0 {
        normalized -= 360.0;
    }
    normalized
}

/// Position inside the sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    let lon = normalize_degrees(longitude);
    lon - (lon / SIGN_SPAN).floor() * SIGN_SPAN
}

/// Shorter arc between two longitudes, in [0, 180].
pub fn circular_difference(a: f64, b: f64) -> f64 {
    let diff = (normalize_degrees(a) - normalize_degrees(b)).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_longitude() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(359.5), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(-10.0), ZodiacSign::Pisces);
    }

    #[test]
    fn test_parse_sign() {
        assert_eq!("Leo".parse::<ZodiacSign>(), Ok(ZodiacSign::Leo));
        assert_eq!(" sagittarius ".parse::<ZodiacSign>(), Ok(ZodiacSign::Sagittarius));
        assert!("Ophiuchus".parse::<ZodiacSign>().is_err());
    }

    #[test]
    fn test_elements_and_rulers() {
        assert_eq!(ZodiacSign::Aries.element(), Element::Fire);
        assert_eq!(ZodiacSign::Virgo.element(), Element::Earth);
        assert_eq!(ZodiacSign::Aquarius.element(), Element::Air);
        assert_eq!(ZodiacSign::Pisces.element(), Element::Water);

        assert_eq!(ZodiacSign::Scorpio.ruler(false), "Mars");
        assert_eq!(ZodiacSign::Scorpio.ruler(true), "Pluto");
        assert_eq!(ZodiacSign::Leo.ruler(true), "Sun");
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert!((normalize_degrees(730.0) - 10.0).abs() < 1e-10);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }

    #[test]
    fn test_degree_in_sign() {
        assert!((degree_in_sign(45.5) - 15.5).abs() < 1e-10);
        assert_eq!(degree_in_sign(30.0), 0.0);
    }

    #[test]
    fn test_circular_difference_is_minor_arc() {
        assert_eq!(circular_difference(10.0, 350.0), 20.0);
        assert_eq!(circular_difference(350.0, 10.0), 20.0);
        assert_eq!(circular_difference(0.0, 180.0), 180.0);

        let mut a = 0.0;
        while a < 360.0 {
            let mut b = 0.0;
            while b < 360.0 {
                let d = circular_difference(a, b);
                assert!(d <= 180.0);
                assert_eq!(d, circular_difference(b, a));
                b += 17.5;
            }
            a += 13.25;
        }
    }
}
