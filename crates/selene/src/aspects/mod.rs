pub mod calculator;
pub mod orbs;
pub mod types;

pub use calculator::AspectCalculator;
pub use orbs::OrbTable;
pub use types::{
    AspectDefinition, AspectError, AspectKind, AspectMatch, AspectPair, ParseAspectError,
    ASPECT_DEFINITIONS,
};
