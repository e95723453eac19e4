//! Bracket snapshot: rounds, pairs, and slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display/persistence label for a BYE slot.
pub const BYE_LABEL: &str = "BYE";

/// One side of a match: a real team, a BYE, or an unresolved winner reference.
///
/// Persisted and rendered as its display string (`"BYE"`, `"Winner of R{r}M{m}"`,
/// or the team name), so stored brackets stay plain arrays of strings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Slot {
    Team(String),
    Bye,
    /// Winner of an earlier match, by 1-based round and match number.
    /// Never resolved to a real name; match outcomes are not tracked.
    Winner { round: u32, match_no: u32 },
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Team(name) => f.write_str(name),
            Slot::Bye => f.write_str(BYE_LABEL),
            Slot::Winner { round, match_no } => write!(f, "Winner of R{round}M{match_no}"),
        }
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> String {
        slot.to_string()
    }
}

impl From<String> for Slot {
    fn from(s: String) -> Self {
        if s == BYE_LABEL {
            return Slot::Bye;
        }
        if let Some(rest) = s.strip_prefix("Winner of R") {
            if let Some((r, m)) = rest.split_once('M') {
                if let (Ok(round), Ok(match_no)) = (r.parse(), m.parse()) {
                    return Slot::Winner { round, match_no };
                }
            }
        }
        Slot::Team(s)
    }
}

/// Two opposing slots within a round. Serializes as a two-element array.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pair(pub Slot, pub Slot);

/// One stage of the bracket; round 1 holds teams/BYEs, later rounds winner references.
pub type Round = Vec<Pair>;

/// Immutable result of one draw. A redraw replaces the whole snapshot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    /// Seed recorded at draw time; the shuffle is a deterministic function of it.
    pub seed: u32,
    /// Round 1 first; pair count halves each round down to the final.
    pub rounds: Vec<Round>,
}
