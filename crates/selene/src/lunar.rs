//! Lunar phase from the Moon–Sun aspect.

use crate::aspects::{AspectCalculator, AspectError, AspectKind};
use crate::bodies::{Body, CelestialBody};
use crate::zodiac::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Moon")]
    WaxingMoon,
    #[serde(rename = "First Quarter Moon")]
    FirstQuarterMoon,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Moon")]
    WaningMoon,
    #[serde(rename = "Last Quarter Moon")]
    LastQuarterMoon,
}

impl MoonPhase {
    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingMoon => "Waxing Moon",
            MoonPhase::FirstQuarterMoon => "First Quarter Moon",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningMoon => "Waning Moon",
            MoonPhase::LastQuarterMoon => "Last Quarter Moon",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Phases that follow directly from the aspect, whatever the direction
pub const MOON_PHASE_TABLE: &[(AspectKind, MoonPhase)] = &[
    (AspectKind::Conjunction, MoonPhase::NewMoon),
    (AspectKind::Opposition, MoonPhase::FullMoon),
];

/// Whether the Moon is moving away from the Sun (less than half a cycle past it).
pub fn is_waxing(moon_lon: f64, sun_lon: f64) -> bool {
    let moon = normalize_degrees(moon_lon);
    let sun = normalize_degrees(sun_lon);
    if moon > sun {
        moon - sun <= 180.0
    } else {
        sun - moon > 180.0
    }
}

pub fn moon_phase(kind: AspectKind, moon_lon: f64, sun_lon: f64) -> Option<MoonPhase> {
    match kind {
        AspectKind::Square => Some(if is_waxing(moon_lon, sun_lon) {
            MoonPhase::FirstQuarterMoon
        } else {
            MoonPhase::LastQuarterMoon
        }),
        AspectKind::Sextile | AspectKind::Trine => Some(if is_waxing(moon_lon, sun_lon) {
            MoonPhase::WaxingMoon
        } else {
            MoonPhase::WaningMoon
        }),
        other => MOON_PHASE_TABLE
            .iter()
            .find(|(aspect, _)| *aspect == other)
            .map(|(_, phase)| *phase),
    }
}

/// String form of [`moon_phase`]. Unrecognized aspect names have no phase.
pub fn resolve_moon_phase(aspect_type: &str, moon_lon: f64, sun_lon: f64) -> Option<MoonPhase> {
    let kind: AspectKind = aspect_type.parse().ok()?;
    moon_phase(kind, moon_lon, sun_lon)
}

/// Phase for a chart holding both a Moon and a Sun. The Moon's orb decides the aspect.
pub fn current_moon_phase(
    calculator: &AspectCalculator,
    bodies: &[CelestialBody],
) -> Result<Option<MoonPhase>, AspectError> {
    let find = |wanted: Body| bodies.iter().find(|b| b.body() == Some(wanted));
    let (Some(moon), Some(sun)) = (find(Body::Moon), find(Body::Sun)) else {
        return Ok(None);
    };
    let aspect = calculator.aspect_between(moon, sun)?;
    Ok(aspect.and_then(|a| moon_phase(a.kind, moon.longitude(), sun.longitude())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waxing_direction() {
        assert!(is_waxing(100.0, 10.0));
        assert!(!is_waxing(10.0, 100.0));
        assert!(is_waxing(10.0, 300.0));
        assert!(!is_waxing(300.0, 10.0));
        assert!(is_waxing(190.0, 10.0));
    }

    #[test]
    fn test_square_phases_only_quarters() {
        let mut moon = 0.0;
        while moon < 360.0 {
            let phase = moon_phase(AspectKind::Square, moon, 45.0).unwrap();
            assert!(matches!(
                phase,
                MoonPhase::FirstQuarterMoon | MoonPhase::LastQuarterMoon
            ));
            moon += 7.5;
        }
        assert_eq!(moon_phase(AspectKind::Square, 90.0, 0.0), Some(MoonPhase::FirstQuarterMoon));
        assert_eq!(moon_phase(AspectKind::Square, 270.0, 0.0), Some(MoonPhase::LastQuarterMoon));
    }

    #[test]
    fn test_table_phases() {
        assert_eq!(moon_phase(AspectKind::Conjunction, 5.0, 3.0), Some(MoonPhase::NewMoon));
        assert_eq!(moon_phase(AspectKind::Opposition, 185.0, 3.0), Some(MoonPhase::FullMoon));
        assert_eq!(moon_phase(AspectKind::Quincunx, 150.0, 0.0), None);
    }

    #[test]
    fn test_resolve_moon_phase() {
        assert_eq!(resolve_moon_phase("trine", 100.0, 10.0), Some(MoonPhase::WaxingMoon));
        assert_eq!(resolve_moon_phase("sextile", 310.0, 10.0), Some(MoonPhase::WaningMoon));
        assert_eq!(resolve_moon_phase("", 100.0, 10.0), None);
        assert_eq!(resolve_moon_phase("semisquare", 100.0, 10.0), None);
    }

    #[test]
    fn test_current_moon_phase() {
        let calculator = AspectCalculator::default();
        let bodies = vec![
            CelestialBody::new("Sun", 10.0, false),
            CelestialBody::new("Moon", 101.0, false),
        ];
        assert_eq!(
            current_moon_phase(&calculator, &bodies).unwrap(),
            Some(MoonPhase::FirstQuarterMoon)
        );

        let without_sun = vec![CelestialBody::new("Moon", 101.0, false)];
        assert_eq!(current_moon_phase(&calculator, &without_sun).unwrap(), None);
    }
}
