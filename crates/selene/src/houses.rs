//! Whole-sign houses.
//!
//! A body's house is its sign's offset from the rising sign, counted from 1.
//! Degree cusps play no part.

use crate::bodies::{Body, CelestialBody};
use crate::zodiac::ZodiacSign;

/// House (1..=12) of `target` counted from `reference`.
pub fn house_number(reference: ZodiacSign, target: ZodiacSign) -> u8 {
    (((target.index() + 12 - reference.index()) % 12) + 1) as u8
}

/// String form of [`house_number`]. `None` when either sign is not recognized.
pub fn resolve_house(reference: &str, target: &str) -> Option<u8> {
    let reference: ZodiacSign = reference.parse().ok()?;
    let target: ZodiacSign = target.parse().ok()?;
    Some(house_number(reference, target))
}

/// Sign of the Ascendant, if the chart carries one.
pub fn rising_sign(bodies: &[CelestialBody]) -> Option<ZodiacSign> {
    bodies
        .iter()
        .find(|b| b.body() == Some(Body::Ascendant))
        .map(CelestialBody::sign)
}

/// Copies of `bodies` with houses assigned from `rising`.
pub fn place_in_houses(bodies: &[CelestialBody], rising: ZodiacSign) -> Vec<CelestialBody> {
    bodies
        .iter()
        .map(|b| {
            let house = house_number(rising, b.sign());
            // house_number never leaves 1..=12
            b.clone().with_house(house).unwrap_or_else(|_| b.clone())
        })
        .collect()
}
