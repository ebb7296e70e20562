// Launch types: per-stat multiplier sets applied when a fighter enters
// the arena, plus the JSON registry they are loaded from.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::stats::{scale_stat, CombatStats};

/// A launch style. Any absent modifier means "no effect" (×1).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchType {
    pub name: String,
    #[serde(default)]
    pub attack_modifier: Option<f64>,
    #[serde(default)]
    pub defense_modifier: Option<f64>,
    #[serde(default)]
    pub stamina_modifier: Option<f64>,
    #[serde(default)]
    pub propulsion_modifier: Option<f64>,
}

impl LaunchType {
    /// A launch with no modifiers at all; applying it only normalizes
    /// absent stats to their defaults.
    pub fn neutral(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// Apply a launch type's multipliers to a stat record.
///
/// Every stat is defaulted, multiplied by its modifier (1.0 when the
/// modifier is absent), and floored.
pub fn apply_launch_modifier(stats: &CombatStats, launch: &LaunchType) -> CombatStats {
    CombatStats {
        attack: Some(scale_stat(stats.attack, launch.attack_modifier.unwrap_or(1.0))),
        defense: Some(scale_stat(
            stats.defense,
            launch.defense_modifier.unwrap_or(1.0),
        )),
        stamina: Some(scale_stat(
            stats.stamina,
            launch.stamina_modifier.unwrap_or(1.0),
        )),
        propulsion: Some(scale_stat(
            stats.propulsion,
            launch.propulsion_modifier.unwrap_or(1.0),
        )),
    }
}

/// Errors from loading a launch-type registry file.
#[derive(Debug, thiserror::Error)]
pub enum LaunchRegistryError {
    #[error("failed to read launch types: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid launch types JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate launch type name: {0}")]
    DuplicateName(String),
}

/// Load a launch-type registry from a JSON file (an array of launch
/// type objects). Names must be unique.
pub fn load_launch_types(path: &Path) -> Result<HashMap<String, LaunchType>, LaunchRegistryError> {
    let contents = std::fs::read_to_string(path)?;
    let entries: Vec<LaunchType> = serde_json::from_str(&contents)?;

    let mut registry = HashMap::new();
    for entry in entries {
        let name = entry.name.clone();
        if registry.insert(name.clone(), entry).is_some() {
            return Err(LaunchRegistryError::DuplicateName(name));
        }
    }
    tracing::debug!(
        "loaded {} launch types from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

/// Built-in launch types used when no registry file is configured.
pub fn builtin_launch_types() -> HashMap<String, LaunchType> {
    let entries = vec![
        LaunchType::neutral("standard"),
        LaunchType {
            name: "power".to_string(),
            attack_modifier: Some(1.3),
            stamina_modifier: Some(0.85),
            ..Default::default()
        },
        LaunchType {
            name: "drift".to_string(),
            propulsion_modifier: Some(1.25),
            defense_modifier: Some(0.9),
            ..Default::default()
        },
        LaunchType {
            name: "anchor".to_string(),
            defense_modifier: Some(1.2),
            stamina_modifier: Some(1.1),
            propulsion_modifier: Some(0.8),
            ..Default::default()
        },
    ];
    entries.into_iter().map(|l| (l.name.clone(), l)).collect()
}
