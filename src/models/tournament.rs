//! Tournament aggregate and TournamentError.

use crate::models::bracket::Bracket;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors that can occur during tournament operations.
///
/// All of these are detected before any state is mutated; a rejected
/// operation leaves the tournament exactly as it was.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Input yielded zero usable team names.
    EmptyInput,
    /// A draw needs at least 2 teams.
    InsufficientTeams,
    /// Pairs/bracket/export requested before any draw.
    NoBracketYet,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyInput => {
                write!(f, "No team names could be parsed from the input")
            }
            TournamentError::InsufficientTeams => {
                write!(f, "Need at least 2 teams to draw a bracket")
            }
            TournamentError::NoBracketYet => write!(f, "No bracket has been drawn yet"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// One tournament per external key: a named team list plus at most one bracket.
///
/// Every field carries a serde default so a partial or absent persisted
/// record deserializes to a usable state instead of failing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    #[serde(default = "default_name")]
    pub name: String,
    /// Ordered team names, unique case-insensitively. A draw never reorders this.
    #[serde(default)]
    pub teams: Vec<String>,
    /// Present only after a successful draw; cleared by reset.
    #[serde(default)]
    pub bracket: Option<Bracket>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_name() -> String {
    format!("Tournament {}", Utc::now().format("%Y-%m-%d"))
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Tournament {
    /// Create a fresh tournament with no teams and no bracket.
    /// A blank or missing name falls back to a dated label.
    pub fn new(name: Option<String>) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(default_name);
        Self {
            name,
            teams: Vec::new(),
            bracket: None,
            created_at: Utc::now(),
        }
    }

    /// Current bracket, or `NoBracketYet` if no draw has happened.
    pub fn bracket(&self) -> Result<&Bracket, TournamentError> {
        self.bracket.as_ref().ok_or(TournamentError::NoBracketYet)
    }

    /// Clear teams and bracket; the name is kept.
    pub fn reset(&mut self) {
        self.teams.clear();
        self.bracket = None;
    }
}
