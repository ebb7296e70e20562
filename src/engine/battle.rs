// Battle resolution: launches two fighters into the arena, applies the
// arena and launch modifiers, then plays out rounds until one fighter
// spins out or the round cap is reached.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::launch::{apply_launch_modifier, LaunchType};
use super::stats::{apply_arena_modifier, CombatStats, Side};
use super::tables::{base_hit_chance, matchup_multiplier, Archetype};

/// Rounds played before the battle is decided on remaining spin.
pub const MAX_ROUNDS: u32 = 10;

/// A fighter as it enters the arena: raw stats, pre-modifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub name: String,
    pub archetype: Archetype,
    pub stats: CombatStats,
}

/// Outcome of a resolved battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    /// Winning side, or None for a draw.
    pub winner: Option<Side>,
    pub rounds: u32,
    /// Remaining spin (stamina pool) per side at the end.
    pub spin_x: i64,
    pub spin_b: i64,
}

/// Chance that a strike by `attacker` lands on `defender`:
/// base hit chance scaled by the matchup multiplier, clamped to [0, 1].
pub fn hit_chance(attacker: Archetype, defender: Archetype) -> f64 {
    (base_hit_chance(attacker) * matchup_multiplier(attacker, defender)).clamp(0.0, 1.0)
}

/// Apply arena then launch modifiers, in that order.
pub fn launch_stats(stats: &CombatStats, side: Side, launch: &LaunchType) -> CombatStats {
    let staged = apply_arena_modifier(stats, side);
    apply_launch_modifier(&staged, launch)
}

/// Spin removed by a landed strike. Always at least 1.
fn strike_damage(attacker: &CombatStats, defender: &CombatStats) -> i64 {
    (attacker.attack() as i64 - defender.defense() as i64 / 2).max(1)
}

/// Resolve a battle between the X-side and B-side fighters.
///
/// Each round the fighter with higher propulsion strikes first (X on ties).
/// A strike lands with probability [`hit_chance`] and drains spin from the
/// opponent. The first fighter whose spin reaches zero loses; after
/// [`MAX_ROUNDS`] the higher remaining spin wins, and equal spin is a draw.
pub fn resolve_battle<R: Rng>(
    x: &Fighter,
    b: &Fighter,
    launch_x: &LaunchType,
    launch_b: &LaunchType,
    rng: &mut R,
) -> BattleResult {
    let stats_x = launch_stats(&x.stats, Side::X, launch_x);
    let stats_b = launch_stats(&b.stats, Side::B, launch_b);

    let mut spin_x = stats_x.stamina() as i64;
    let mut spin_b = stats_b.stamina() as i64;

    let chance_x = hit_chance(x.archetype, b.archetype);
    let chance_b = hit_chance(b.archetype, x.archetype);

    tracing::debug!(
        "battle start: {} (X, spin {spin_x}) vs {} (B, spin {spin_b})",
        x.name,
        b.name
    );

    let mut rounds = 0;
    while rounds < MAX_ROUNDS && spin_x > 0 && spin_b > 0 {
        rounds += 1;

        let order: [Side; 2] = if stats_x.propulsion() >= stats_b.propulsion() {
            [Side::X, Side::B]
        } else {
            [Side::B, Side::X]
        };

        for side in order {
            match side {
                Side::X if spin_x > 0 && spin_b > 0 => {
                    if rng.gen::<f64>() < chance_x {
                        let damage = strike_damage(&stats_x, &stats_b);
                        spin_b -= damage;
                        tracing::debug!("round {rounds}: {} hits for {damage}", x.name);
                    }
                }
                Side::B if spin_b > 0 && spin_x > 0 => {
                    if rng.gen::<f64>() < chance_b {
                        let damage = strike_damage(&stats_b, &stats_x);
                        spin_x -= damage;
                        tracing::debug!("round {rounds}: {} hits for {damage}", b.name);
                    }
                }
                _ => {}
            }
        }
    }

    let winner = if spin_x <= 0 && spin_b <= 0 {
        None
    } else if spin_b <= 0 {
        Some(Side::X)
    } else if spin_x <= 0 {
        Some(Side::B)
    } else if spin_x > spin_b {
        Some(Side::X)
    } else if spin_b > spin_x {
        Some(Side::B)
    } else {
        None
    };

    tracing::info!(
        "battle over after {rounds} rounds: winner {winner:?} (spin X {spin_x}, B {spin_b})"
    );

    BattleResult {
        winner,
        rounds,
        spin_x,
        spin_b,
    }
}
