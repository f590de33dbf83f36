//! Selene - aspect, house and lunar-phase calculations for chart positions.
//!
//! Positions come from an ephemeris service; everything here is a pure
//! function of the values passed in.

pub mod aspects;
pub mod bodies;
pub mod describe;
pub mod houses;
pub mod lunar;
pub mod zodiac;

pub use aspects::{AspectCalculator, AspectError, AspectKind, AspectMatch, AspectPair, OrbTable};
pub use bodies::{Body, BodyError, CelestialBody};
pub use houses::{house_number, resolve_house};
pub use lunar::{moon_phase, resolve_moon_phase, MoonPhase};
pub use zodiac::{circular_difference, normalize_degrees, ZodiacSign};
