//! Data structures: tournament aggregate and bracket snapshot.

mod bracket;
mod tournament;

pub use bracket::{Bracket, Pair, Round, Slot, BYE_LABEL};
pub use tournament::{Tournament, TournamentError};
