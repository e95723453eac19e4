//! Team registry: raw-text normalization and append-only merge.

use crate::models::{Tournament, TournamentError};

/// Split raw text into team names: separators are `;`, `,`, and newline;
/// pieces are trimmed, empties dropped, and duplicates removed
/// case-insensitively keeping the first occurrence's casing and position.
pub fn normalize(raw: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut uniq: Vec<String> = Vec::new();
    for piece in raw.split(|c| c == ';' || c == ',' || c == '\n') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let folded = piece.to_lowercase();
        if !seen.contains(&folded) {
            seen.push(folded);
            uniq.push(piece.to_string());
        }
    }
    uniq
}

/// Append `incoming` entries to `existing`, skipping case-insensitive
/// duplicates. The check runs against the growing list, so duplicates
/// within `incoming` are suppressed too. Existing entries are never
/// reordered or removed. Returns the new list and how many were appended.
pub fn merge(existing: &[String], incoming: Vec<String>) -> (Vec<String>, usize) {
    let mut updated = existing.to_vec();
    let mut added = 0;
    for name in incoming {
        let folded = name.to_lowercase();
        if !updated.iter().any(|t| t.to_lowercase() == folded) {
            updated.push(name);
            added += 1;
        }
    }
    (updated, added)
}

/// Normalize `raw` and merge the result into the tournament's team list.
/// Fails with `EmptyInput` (and changes nothing) if no names were parsed.
pub fn add_teams(tournament: &mut Tournament, raw: &str) -> Result<usize, TournamentError> {
    let incoming = normalize(raw);
    if incoming.is_empty() {
        return Err(TournamentError::EmptyInput);
    }
    let (updated, added) = merge(&tournament.teams, incoming);
    tournament.teams = updated;
    Ok(added)
}
