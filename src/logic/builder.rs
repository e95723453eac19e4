//! Bracket builder: BYE padding, first-round pairing, placeholder rounds.
//!
//! Everything here is pure; the only randomness in a draw is the caller's
//! shuffle of the team order before these functions run.

use crate::models::{Pair, Round, Slot};

/// Smallest power of two >= `n`; 1 for `n < 1`.
pub fn next_power_of_two(n: usize) -> usize {
    if n < 1 {
        1
    } else {
        n.next_power_of_two()
    }
}

/// Pair slots two at a time in order; an odd tail is matched against a BYE.
pub fn build_first_round(slots: &[Slot]) -> Round {
    slots
        .chunks(2)
        .map(|chunk| {
            let a = chunk[0].clone();
            let b = chunk.get(1).cloned().unwrap_or(Slot::Bye);
            Pair(a, b)
        })
        .collect()
}

/// Build all rounds for `seed_teams` in the given order.
///
/// Pads with BYEs at the tail up to a power of two, pairs the first round,
/// then synthesizes winner-reference rounds until a round with exactly one
/// pair (the final). No minimum-team guard: that is the caller's job.
pub fn build_full_bracket(seed_teams: &[String]) -> Vec<Round> {
    let target = next_power_of_two(seed_teams.len());
    let mut padded: Vec<Slot> = seed_teams.iter().cloned().map(Slot::Team).collect();
    padded.resize(target, Slot::Bye);

    let mut rounds: Vec<Round> = vec![build_first_round(&padded)];
    let mut matches_in_round = rounds[0].len();
    while matches_in_round > 1 {
        // 1-based number of the round these matches come from.
        let round_no = rounds.len() as u32;
        let next: Round = (0..matches_in_round / 2)
            .map(|i| {
                Pair(
                    Slot::Winner {
                        round: round_no,
                        match_no: 2 * i as u32 + 1,
                    },
                    Slot::Winner {
                        round: round_no,
                        match_no: 2 * i as u32 + 2,
                    },
                )
            })
            .collect();
        matches_in_round = next.len();
        rounds.push(next);
    }
    rounds
}
