// Archetypes and the static hit-chance tables.
//
// Base hit chance per archetype and a 4x4 matchup multiplier matrix.
// Pure data; composition with other factors lives in the battle module.

use serde::{Deserialize, Serialize};

/// A fighter's combat style (its "bit type").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Attack,
    Defense,
    Balance,
    Stamina,
}

impl Archetype {
    /// Parse an archetype string (from stored fighter data).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "attack" => Some(Self::Attack),
            "defense" => Some(Self::Defense),
            "balance" => Some(Self::Balance),
            "stamina" => Some(Self::Stamina),
            _ => None,
        }
    }

    pub fn to_str_name(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::Balance => "balance",
            Self::Stamina => "stamina",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Attack => 0,
            Self::Defense => 1,
            Self::Balance => 2,
            Self::Stamina => 3,
        }
    }
}

/// Base chance that a strike lands, before matchup adjustment.
/// Ordered attack > balance > defense > stamina.
pub fn base_hit_chance(archetype: Archetype) -> f64 {
    match archetype {
        Archetype::Attack => 0.90,
        Archetype::Balance => 0.85,
        Archetype::Defense => 0.80,
        Archetype::Stamina => 0.75,
    }
}

// Matchup multipliers [attacker][defender], indexed by Archetype::index().
// Attack beats stamina, stamina beats defense, defense beats attack;
// balance is neutral. All values within [0.85, 1.2].
const MATCHUP: [[f64; 4]; 4] = [
    // vs:  attack defense balance stamina
    /* attack  */ [1.0, 0.85, 1.0, 1.2],
    /* defense */ [1.2, 1.0, 1.0, 0.85],
    /* balance */ [1.0, 1.0, 1.0, 1.0],
    /* stamina */ [0.85, 1.2, 1.0, 1.0],
];

/// Matchup multiplier for an attacker archetype striking a defender.
pub fn matchup_multiplier(attacker: Archetype, defender: Archetype) -> f64 {
    MATCHUP[attacker.index()][defender.index()]
}
