//! Orb tolerance per transiting body.

use crate::aspects::types::AspectError;
use crate::bodies::Body;
use std::collections::HashMap;

/// Standard orbs in degrees, keyed by the body that selects the tolerance
const STANDARD_ORBS: &[(Body, f64)] = &[
    (Body::Sun, 10.0),
    (Body::Moon, 10.0),
    (Body::Mercury, 7.0),
    (Body::Venus, 7.0),
    (Body::Mars, 7.0),
    (Body::Jupiter, 6.0),
    (Body::Saturn, 6.0),
    (Body::Uranus, 5.0),
    (Body::Neptune, 5.0),
    (Body::Pluto, 5.0),
    (Body::Chiron, 3.0),
    (Body::NorthNode, 3.0),
    (Body::Ascendant, 5.0),
    (Body::Midheaven, 5.0),
];

/// Read-only orb lookup, assembled once and then shared by a calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbTable {
    orbs: HashMap<Body, f64>,
    fallback: Option<f64>,
}

fn check_orb(body: &str, orb: f64) -> Result<f64, AspectError> {
    if orb.is_finite() && orb >= 0.0 {
        Ok(orb)
    } else {
        Err(AspectError::InvalidOrb {
            body: body.to_string(),
            orb,
        })
    }
}

impl OrbTable {
    pub fn standard() -> Self {
        Self {
            orbs: STANDARD_ORBS.iter().copied().collect(),
            fallback: None,
        }
    }

    pub fn with_override(mut self, body: Body, orb: f64) -> Result<Self, AspectError> {
        let orb = check_orb(body.name(), orb)?;
        self.orbs.insert(body, orb);
        Ok(self)
    }

    /// Apply overrides keyed by body name. Names that are not known bodies are rejected.
    pub fn with_overrides<I, S>(mut self, overrides: I) -> Result<Self, AspectError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (name, orb) in overrides {
            let name = name.as_ref();
            let body: Body = name
                .parse()
                .map_err(|_| AspectError::UnknownBody(name.to_string()))?;
            self = self.with_override(body, orb)?;
        }
        Ok(self)
    }

    /// Orb used for names that are not in the table.
    pub fn with_fallback(mut self, orb: f64) -> Result<Self, AspectError> {
        self.fallback = Some(check_orb("fallback", orb)?);
        Ok(self)
    }

    pub fn fallback(&self) -> Option<f64> {
        self.fallback
    }

    pub fn get(&self, body: Body) -> Option<f64> {
        self.orbs.get(&body).copied()
    }

    /// Orb for a body name, falling back when configured.
    pub fn orb_for(&self, name: &str) -> Result<f64, AspectError> {
        if let Some(orb) = name.parse::<Body>().ok().and_then(|body| self.get(body)) {
            return Ok(orb);
        }
        match self.fallback {
            Some(orb) => {
                log::debug!("No orb for {name}; using fallback {orb}");
                Ok(orb)
            }
            None => Err(AspectError::UnknownBody(name.to_string())),
        }
    }
}

impl Default for OrbTable {
    fn default() -> Self {
        Self::standard()
    }
}
