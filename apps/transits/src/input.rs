use anyhow::Context;
use selene::bodies::{parse_bodies_json, CelestialBody};
use selene::{AspectCalculator, OrbTable};
use selene_config::OrbSettings;
use std::fs;
use std::path::Path;

/// Positions from a JSON file: a bare array of records or `{ "bodies": [...] }`.
pub fn load_bodies(path: &Path) -> anyhow::Result<Vec<CelestialBody>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read positions file {}", path.display()))?;
    let bodies = parse_bodies_json(&text)
        .with_context(|| format!("Failed to parse positions in {}", path.display()))?;
    if bodies.is_empty() {
        anyhow::bail!("No bodies found in {}", path.display());
    }
    log::debug!("Loaded {} bodies from {}", bodies.len(), path.display());
    Ok(bodies)
}

pub fn build_calculator(settings: &OrbSettings) -> anyhow::Result<AspectCalculator> {
    let mut orbs = OrbTable::standard()
        .with_overrides(settings.overrides.iter().map(|(name, orb)| (name, *orb)))
        .context("Invalid [orbs.bodies] entry")?;
    if let Some(fallback) = settings.fallback {
        orbs = orbs.with_fallback(fallback)?;
    }
    Ok(AspectCalculator::new(orbs))
}
