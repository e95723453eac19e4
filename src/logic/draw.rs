//! Seeded draw: random seed, deterministic shuffle, bracket install.

use crate::logic::builder::build_full_bracket;
use crate::models::{Bracket, Tournament, TournamentError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeds are drawn from this 6-digit range and recorded for audit.
pub const SEED_MIN: u32 = 100_000;
pub const SEED_MAX: u32 = 999_999;

/// Deterministic permutation of `teams` for a given seed.
///
/// Same seed and same input order always produce the same output, which
/// makes any recorded draw reproducible after the fact.
pub fn shuffled_order(teams: &[String], seed: u32) -> Vec<String> {
    let mut order = teams.to_vec();
    let mut rng = StdRng::seed_from_u64(u64::from(seed));
    order.shuffle(&mut rng);
    order
}

/// Draw a bracket: pick a fresh seed, shuffle a copy of the team list,
/// build all rounds, and replace the tournament's bracket wholesale.
/// The stored team order is left untouched. Returns the seed.
pub fn draw(tournament: &mut Tournament) -> Result<u32, TournamentError> {
    if tournament.teams.len() < 2 {
        return Err(TournamentError::InsufficientTeams);
    }
    let seed = rand::thread_rng().gen_range(SEED_MIN..=SEED_MAX);
    let order = shuffled_order(&tournament.teams, seed);
    let rounds = build_full_bracket(&order);
    log::info!(
        "Drew bracket for '{}': seed {}, {} team(s), {} round(s)",
        tournament.name,
        seed,
        tournament.teams.len(),
        rounds.len()
    );
    tournament.bracket = Some(Bracket { seed, rounds });
    Ok(seed)
}
