//! Single-elimination bracket organizer: library with models, draw logic,
//! rendering/export, and keyed persistence.

pub mod logic;
pub mod models;
pub mod render;
pub mod storage;

pub use logic::{
    add_teams, build_first_round, build_full_bracket, draw, merge, next_power_of_two, normalize,
    shuffled_order, SEED_MAX, SEED_MIN,
};
pub use models::{Bracket, Pair, Round, Slot, Tournament, TournamentError, BYE_LABEL};
pub use render::{
    chunk_text, export_csv, export_filename, export_rows, render_bracket_tree, render_round,
    render_team_list, ExportRow, TRANSPORT_CHUNK_LIMIT,
};
pub use storage::{Store, StoreError};
