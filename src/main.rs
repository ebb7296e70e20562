// Demo battle runner: loads launch types, plays the countdown, resolves
// a battle, and prints the result.

use rand::rngs::StdRng;
use rand::SeedableRng;

use bitarena::config::Config;
use bitarena::countdown::play_countdown;
use bitarena::engine::battle::{resolve_battle, Fighter};
use bitarena::engine::launch::{builtin_launch_types, load_launch_types, LaunchType};
use bitarena::engine::stats::{CombatStats, Side};
use bitarena::engine::tables::Archetype;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::load();

    let launch_types = match &config.launch_types_file {
        Some(path) => match load_launch_types(path) {
            Ok(registry) => registry,
            Err(e) => {
                tracing::error!("falling back to built-in launch types: {e}");
                builtin_launch_types()
            }
        },
        None => builtin_launch_types(),
    };

    let launch_x = launch_types
        .get("power")
        .cloned()
        .unwrap_or_else(|| LaunchType::neutral("standard"));
    let launch_b = launch_types
        .get("anchor")
        .cloned()
        .unwrap_or_else(|| LaunchType::neutral("standard"));

    let x = Fighter {
        name: "Razor Fang".to_string(),
        archetype: Archetype::Attack,
        stats: CombatStats::new(85, 55, 60, 75),
    };
    let b = Fighter {
        name: "Iron Shell".to_string(),
        archetype: Archetype::Defense,
        stats: CombatStats::new(55, 85, 80, 50),
    };

    tracing::info!(
        "{} ({}) launches {} vs {} ({}) launches {}",
        x.name,
        x.archetype.to_str_name(),
        launch_x.name,
        b.name,
        b.archetype.to_str_name(),
        launch_b.name
    );

    play_countdown(&["3", "2", "1", "GO!"], config.countdown_delay, |step| {
        match step {
            Some(s) => println!("{s}"),
            None => println!("--- battle! ---"),
        }
    })
    .await;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = resolve_battle(&x, &b, &launch_x, &launch_b, &mut rng);

    match result.winner {
        Some(Side::X) => println!("{} wins after {} rounds!", x.name, result.rounds),
        Some(Side::B) => println!("{} wins after {} rounds!", b.name, result.rounds),
        None => println!("Draw after {} rounds!", result.rounds),
    }
    println!(
        "remaining spin: {} {}, {} {}",
        x.name, result.spin_x, b.name, result.spin_b
    );
}
