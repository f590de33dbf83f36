//! Human-readable transit descriptions.

use crate::aspects::{AspectCalculator, AspectError, AspectMatch};
use crate::bodies::CelestialBody;
use crate::lunar::MoonPhase;
use crate::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};

/// One row of a transit table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitRow {
    pub transiting_body: String,
    pub transiting_sign: ZodiacSign,
    pub transiting_retrograde: bool,
    pub aspect: String,
    pub natal_body: String,
    pub natal_sign: ZodiacSign,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natal_house: Option<u8>,
    pub orb: f64,
}

/// "1st", "2nd", "3rd", "4th", ..., "11th", "12th", "21st"
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// "Venus in Libra", "Mercury retrograde in Virgo in the 6th house"
pub fn describe_body(body: &CelestialBody) -> String {
    let mut text = body.name().to_string();
    if body.is_retrograde() {
        text.push_str(" retrograde");
    }
    text.push_str(" in ");
    text.push_str(body.sign().name());
    if let Some(house) = body.house() {
        text.push_str(&format!(" in the {} house", ordinal(house as u32)));
    }
    text
}

pub fn format_aspect(
    transiting: &CelestialBody,
    natal: &CelestialBody,
    aspect: &AspectMatch,
) -> String {
    let name = aspect.kind.name();
    let article = match name.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    };
    format!(
        "{} forming {article} {name} to {} with an orb of {:.1} degrees",
        describe_body(transiting),
        describe_body(natal),
        aspect.orb
    )
}

/// Active (transiting, natal, aspect) triples in transiting-major order
fn active_aspects<'a>(
    calculator: &AspectCalculator,
    transits: &'a [CelestialBody],
    natal: &'a [CelestialBody],
) -> Result<Vec<(&'a CelestialBody, &'a CelestialBody, AspectMatch)>, AspectError> {
    let mut found = Vec::new();
    for transit in transits {
        for natal_body in natal {
            if let Some(aspect) = calculator.aspect_between(transit, natal_body)? {
                found.push((transit, natal_body, aspect));
            }
        }
    }
    Ok(found)
}

/// One sentence per transit-to-natal aspect.
pub fn format_transit_data(
    calculator: &AspectCalculator,
    transits: &[CelestialBody],
    natal: &[CelestialBody],
) -> Result<Vec<String>, AspectError> {
    Ok(active_aspects(calculator, transits, natal)?
        .into_iter()
        .map(|(transit, natal_body, aspect)| format_aspect(transit, natal_body, &aspect))
        .collect())
}

pub fn format_transit_data_for_table(
    calculator: &AspectCalculator,
    transits: &[CelestialBody],
    natal: &[CelestialBody],
) -> Result<Vec<TransitRow>, AspectError> {
    Ok(active_aspects(calculator, transits, natal)?
        .into_iter()
        .map(|(transit, natal_body, aspect)| TransitRow {
            transiting_body: transit.name().to_string(),
            transiting_sign: transit.sign(),
            transiting_retrograde: transit.is_retrograde(),
            aspect: aspect.kind.name().to_string(),
            natal_body: natal_body.name().to_string(),
            natal_sign: natal_body.sign(),
            natal_house: natal_body.house(),
            orb: aspect.orb,
        })
        .collect())
}

pub fn format_moon_phase(phase: MoonPhase) -> String {
    format!("Current lunar phase: {phase}")
}
