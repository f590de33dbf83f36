use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const DEFAULT_PATHS: [&str; 2] = ["configs/selene.toml", "../../configs/selene.toml"];

/// Orb settings layered over the built-in orb table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrbSettings {
    /// Body name -> orb in degrees
    pub overrides: BTreeMap<String, f64>,
    /// Orb for bodies with no entry; `None` makes unknown bodies an error
    pub fallback: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OrbsToml {
    #[serde(default)]
    fallback: Option<f64>,
    #[serde(default)]
    bodies: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    orbs: Option<OrbsToml>,
}

/// Read the config text from `explicit`, or from the first default location that exists.
///
/// Returns `Ok(None)` when no explicit path was given and no default file is present.
pub fn read_config_text(explicit: Option<&Path>) -> anyhow::Result<Option<String>> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        return Ok(Some(text));
    }
    for p in &DEFAULT_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(Some(c));
        }
    }
    Ok(None)
}

fn validate_orb(name: &str, orb: f64) -> anyhow::Result<()> {
    if !orb.is_finite() || orb < 0.0 {
        anyhow::bail!("orbs.{name} must be a non-negative number of degrees, got {orb}");
    }
    Ok(())
}

pub fn parse_orb_settings(text: &str) -> anyhow::Result<OrbSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse selene.toml orb settings: {e}"))?;
    let OrbsToml { fallback, bodies } = root.orbs.unwrap_or_default();
    if let Some(orb) = fallback {
        validate_orb("fallback", orb)?;
    }
    for (name, orb) in &bodies {
        validate_orb(&format!("bodies.{name}"), *orb)?;
    }
    Ok(OrbSettings {
        overrides: bodies,
        fallback,
    })
}

pub fn load_orb_settings(explicit: Option<&Path>) -> anyhow::Result<OrbSettings> {
    match read_config_text(explicit)? {
        Some(text) => parse_orb_settings(&text),
        None => Ok(OrbSettings::default()),
    }
}
