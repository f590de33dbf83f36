use crate::aspects::orbs::OrbTable;
use crate::aspects::types::{AspectError, AspectMatch, AspectPair, ASPECT_DEFINITIONS};
use crate::bodies::{Body, CelestialBody};
use crate::zodiac::circular_difference;

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    orbs: OrbTable,
}

impl AspectCalculator {
    pub fn new(orbs: OrbTable) -> Self {
        Self { orbs }
    }

    pub fn orbs(&self) -> &OrbTable {
        &self.orbs
    }

    /// Aspect between two longitudes, judged with the orb of `transiting`.
    ///
    /// Returns `Ok(None)` when no aspect is within orb, and an error when the
    /// body has no orb and the table has no fallback.
    pub fn compute_aspect(
        &self,
        lon_a: f64,
        lon_b: f64,
        transiting: &str,
    ) -> Result<Option<AspectMatch>, AspectError> {
        let max_orb = self.orbs.orb_for(transiting)?;
        Ok(match_aspect(lon_a, lon_b, max_orb))
    }

    /// Same as [`compute_aspect`](Self::compute_aspect) for a known body.
    pub fn compute_aspect_for(&self, lon_a: f64, lon_b: f64, body: Body) -> Option<AspectMatch> {
        let max_orb = self.orbs.get(body).or(self.orbs.fallback())?;
        match_aspect(lon_a, lon_b, max_orb)
    }

    /// Aspect from `transiting` to `other`. Retrograde motion does not change the match.
    pub fn aspect_between(
        &self,
        transiting: &CelestialBody,
        other: &CelestialBody,
    ) -> Result<Option<AspectMatch>, AspectError> {
        self.compute_aspect(transiting.longitude(), other.longitude(), transiting.name())
    }

    /// Aspects from every transiting body to every natal body.
    pub fn aspects_between(
        &self,
        transiting: &[CelestialBody],
        natal: &[CelestialBody],
    ) -> Result<Vec<AspectPair>, AspectError> {
        let mut pairs = Vec::new();
        for from in transiting {
            for to in natal {
                if let Some(aspect) = self.aspect_between(from, to)? {
                    pairs.push(AspectPair {
                        from: from.name().to_string(),
                        to: to.name().to_string(),
                        aspect,
                    });
                }
            }
        }
        Ok(pairs)
    }

    /// Aspects among the bodies of a single chart, each pair counted once.
    pub fn aspects_within(&self, bodies: &[CelestialBody]) -> Result<Vec<AspectPair>, AspectError> {
        let mut pairs = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (from, to) = (&bodies[i], &bodies[j]);
                if let Some(aspect) = self.aspect_between(from, to)? {
                    pairs.push(AspectPair {
                        from: from.name().to_string(),
                        to: to.name().to_string(),
                        aspect,
                    });
                }
            }
        }
        Ok(pairs)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// First aspect in table order whose deviation is within `max_orb`.
fn match_aspect(lon_a: f64, lon_b: f64, max_orb: f64) -> Option<AspectMatch> {
    let diff = circular_difference(lon_a, lon_b);
    ASPECT_DEFINITIONS.iter().find_map(|def| {
        let orb = (diff - def.angle).abs();
        (orb <= max_orb).then(|| AspectMatch {
            kind: def.kind,
            exact_angle: def.angle,
            orb: round_to_tenth(orb),
        })
    })
}
