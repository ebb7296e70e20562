// Battle engine: stat records, modifier application, hit-chance tables,
// and battle resolution.

pub mod battle;
pub mod launch;
pub mod stats;
pub mod tables;
