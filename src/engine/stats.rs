// Combat stat records and the arena (side) modifier.
//
// Stats are value types: every modifier returns a new record, inputs are
// never mutated. Absent fields are filled with DEFAULT_STAT before any
// arithmetic, and every computed stat is floored back to an integer.

use serde::{Deserialize, Serialize};

/// Fallback value substituted for any absent stat field.
pub const DEFAULT_STAT: u32 = 50;

// Arena adjustment applied to the side-favored / side-penalized stat.
const ARENA_BOOST: f64 = 1.2;
const ARENA_PENALTY: f64 = 0.8;

/// Which half of the arena a fighter launches from.
///
/// Side X favors propulsion, side B favors stamina.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    X,
    B,
}

/// The four combat stats of a fighter. Each field is optional; readers
/// substitute [`DEFAULT_STAT`] for absent values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub attack: Option<u32>,
    pub defense: Option<u32>,
    pub stamina: Option<u32>,
    pub propulsion: Option<u32>,
}

impl CombatStats {
    pub fn new(attack: u32, defense: u32, stamina: u32, propulsion: u32) -> Self {
        Self {
            attack: Some(attack),
            defense: Some(defense),
            stamina: Some(stamina),
            propulsion: Some(propulsion),
        }
    }

    pub fn attack(&self) -> u32 {
        self.attack.unwrap_or(DEFAULT_STAT)
    }

    pub fn defense(&self) -> u32 {
        self.defense.unwrap_or(DEFAULT_STAT)
    }

    pub fn stamina(&self) -> u32 {
        self.stamina.unwrap_or(DEFAULT_STAT)
    }

    pub fn propulsion(&self) -> u32 {
        self.propulsion.unwrap_or(DEFAULT_STAT)
    }
}

/// Multiply a (defaulted) stat by a modifier and floor back to an integer.
pub(crate) fn scale_stat(stat: Option<u32>, modifier: f64) -> u32 {
    (stat.unwrap_or(DEFAULT_STAT) as f64 * modifier).floor() as u32
}

/// Apply the side-dependent arena adjustment.
///
/// Side X: propulsion ×1.2, stamina ×0.8. Side B: the inverse.
/// Attack and defense pass through untouched, including absence.
pub fn apply_arena_modifier(stats: &CombatStats, side: Side) -> CombatStats {
    let (propulsion_mod, stamina_mod) = match side {
        Side::X => (ARENA_BOOST, ARENA_PENALTY),
        Side::B => (ARENA_PENALTY, ARENA_BOOST),
    };

    CombatStats {
        attack: stats.attack,
        defense: stats.defense,
        stamina: Some(scale_stat(stats.stamina, stamina_mod)),
        propulsion: Some(scale_stat(stats.propulsion, propulsion_mod)),
    }
}
