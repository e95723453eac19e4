//! Rendering and export: round text, full bracket tree, team list,
//! tabular export rows, CSV, and transport chunking.

use crate::models::{Pair, Round, Tournament};

/// Maximum size of one outgoing message chunk, in bytes.
pub const TRANSPORT_CHUNK_LIMIT: usize = 3500;

/// One round as text: a header line plus one `M{n}. A — B` line per pair.
pub fn render_round(round: &[Pair], round_no: usize) -> String {
    let mut lines = vec![format!("Round {round_no}:")];
    for (idx, pair) in round.iter().enumerate() {
        lines.push(format!("M{}. {} — {}", idx + 1, pair.0, pair.1));
    }
    lines.join("\n")
}

/// All rounds as text, separated by one blank line, none trailing.
pub fn render_bracket_tree(rounds: &[Round]) -> String {
    rounds
        .iter()
        .enumerate()
        .map(|(i, round)| render_round(round, i + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Team list as text: a count header plus one bullet per team.
pub fn render_team_list(teams: &[String]) -> String {
    let mut lines = vec![format!("Teams ({}):", teams.len())];
    lines.extend(teams.iter().map(|t| format!("• {t}")));
    lines.join("\n")
}

/// One row of the tabular export: 1-based round and match numbers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExportRow {
    pub round: usize,
    pub match_no: usize,
    pub team_a: String,
    pub team_b: String,
}

/// Flatten every pair across every round, round order then match order.
pub fn export_rows(rounds: &[Round]) -> Vec<ExportRow> {
    let mut rows = Vec::new();
    for (r_idx, round) in rounds.iter().enumerate() {
        for (m_idx, pair) in round.iter().enumerate() {
            rows.push(ExportRow {
                round: r_idx + 1,
                match_no: m_idx + 1,
                team_a: pair.0.to_string(),
                team_b: pair.1.to_string(),
            });
        }
    }
    rows
}

/// CSV export: `Round, Match, Team A, Team B` header plus one row per pair.
pub fn export_csv(rounds: &[Round]) -> Result<Vec<u8>, csv::Error> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(["Round", "Match", "Team A", "Team B"])?;
        for row in export_rows(rounds) {
            writer.write_record([
                row.round.to_string(),
                row.match_no.to_string(),
                row.team_a,
                row.team_b,
            ])?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

/// Download filename for a tournament's export.
pub fn export_filename(tournament: &Tournament) -> String {
    format!("{}_bracket.csv", tournament.name.replace(' ', "_"))
}

/// Split `text` into chunks of at most `max` bytes, breaking on line
/// boundaries where possible. A single line longer than `max` is split at
/// character boundaries.
pub fn chunk_text(text: &str, max: usize) -> Vec<String> {
    if text.len() <= max {
        return vec![text.to_string()];
    }
    let mut chunks = Vec::new();
    let mut current = String::new();
    for line in text.split('\n') {
        if line.len() > max {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            for ch in line.chars() {
                if current.len() + ch.len_utf8() > max {
                    chunks.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
            continue;
        }
        if !current.is_empty() && current.len() + 1 + line.len() > max {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
