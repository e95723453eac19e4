//! Draw logic: team registry, bracket building, seeded shuffle.

mod builder;
mod draw;
mod registry;

pub use builder::{build_first_round, build_full_bracket, next_power_of_two};
pub use draw::{draw, shuffled_order, SEED_MAX, SEED_MIN};
pub use registry::{add_teams, merge, normalize};
