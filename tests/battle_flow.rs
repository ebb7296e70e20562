// Integration tests for the full battle pipeline: arena + launch modifier
// staging, hit-chance composition, battle resolution, and the countdown
// sequencer driving a result callback.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use bitarena::countdown::play_countdown;
use bitarena::engine::battle::{hit_chance, launch_stats, resolve_battle, Fighter, MAX_ROUNDS};
use bitarena::engine::launch::{builtin_launch_types, LaunchType};
use bitarena::engine::stats::{CombatStats, Side};
use bitarena::engine::tables::Archetype;

fn sample_fighters() -> (Fighter, Fighter) {
    (
        Fighter {
            name: "Razor Fang".to_string(),
            archetype: Archetype::Attack,
            stats: CombatStats::new(85, 55, 60, 75),
        },
        Fighter {
            name: "Iron Shell".to_string(),
            archetype: Archetype::Defense,
            stats: CombatStats::new(55, 85, 80, 50),
        },
    )
}

#[test]
fn test_full_pipeline_produces_result() {
    let (x, b) = sample_fighters();
    let registry = builtin_launch_types();
    let mut rng = StdRng::seed_from_u64(1);

    let result = resolve_battle(&x, &b, &registry["power"], &registry["anchor"], &mut rng);

    assert!(result.rounds >= 1 && result.rounds <= MAX_ROUNDS);
    // Loser's spin reached zero, or both survived to the cap
    assert!(
        result.spin_x <= 0 || result.spin_b <= 0 || result.rounds == MAX_ROUNDS,
        "battle ended early with both fighters spinning"
    );
}

#[test]
fn test_pipeline_stats_match_manual_staging() {
    let (x, _) = sample_fighters();
    let launch = LaunchType {
        name: "power".to_string(),
        attack_modifier: Some(1.3),
        stamina_modifier: Some(0.85),
        ..Default::default()
    };

    let staged = launch_stats(&x.stats, Side::X, &launch);
    // arena X: propulsion floor(75*1.2)=90, stamina floor(60*0.8)=48
    // launch: attack floor(85*1.3)=110, stamina floor(48*0.85)=40
    assert_eq!(staged.attack, Some(110));
    assert_eq!(staged.defense, Some(55));
    assert_eq!(staged.stamina, Some(40));
    assert_eq!(staged.propulsion, Some(90));
}

#[test]
fn test_hit_chances_stay_probabilities_for_all_pairings() {
    let all = [
        Archetype::Attack,
        Archetype::Defense,
        Archetype::Balance,
        Archetype::Stamina,
    ];
    for a in all {
        for d in all {
            let c = hit_chance(a, d);
            assert!((0.0..=1.0).contains(&c), "{c} out of range");
        }
    }
}

#[tokio::test]
async fn test_countdown_then_battle() {
    let (x, b) = sample_fighters();
    let registry = builtin_launch_types();

    let mut steps_seen = 0;
    let mut done = false;
    play_countdown(&["3", "2", "1"], Duration::ZERO, |step| match step {
        Some(_) => steps_seen += 1,
        None => done = true,
    })
    .await;

    assert_eq!(steps_seen, 3);
    assert!(done, "countdown must end with the sentinel");

    let mut rng = StdRng::seed_from_u64(99);
    let result = resolve_battle(&x, &b, &registry["drift"], &registry["standard"], &mut rng);
    assert!(result.rounds >= 1);
}
