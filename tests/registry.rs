//! Integration tests for the team registry: normalization and merging.

use bracket_draw_web::{add_teams, merge, normalize, Tournament, TournamentError};

#[test]
fn normalize_splits_on_all_separators() {
    let teams = normalize("Alpha; Beta\nGamma, Delta");
    assert_eq!(teams, vec!["Alpha", "Beta", "Gamma", "Delta"]);
}

#[test]
fn normalize_trims_and_drops_empty_pieces() {
    let teams = normalize("  Alpha  ;; ,\n  Beta ");
    assert_eq!(teams, vec!["Alpha", "Beta"]);
}

#[test]
fn normalize_dedupes_case_insensitively_keeping_first() {
    let teams = normalize("Alpha; ALPHA; alpha; Beta; beta");
    assert_eq!(teams, vec!["Alpha", "Beta"]);
}

#[test]
fn normalize_blank_input_yields_nothing() {
    assert!(normalize("").is_empty());
    assert!(normalize(" ; , \n ").is_empty());
}

#[test]
fn merge_appends_only_new_names() {
    let existing = vec!["Alpha".to_string(), "Beta".to_string()];
    let incoming = vec!["alpha".to_string(), "Gamma".to_string()];
    let (updated, added) = merge(&existing, incoming);
    assert_eq!(updated, vec!["Alpha", "Beta", "Gamma"]);
    assert_eq!(added, 1);
}

#[test]
fn merge_suppresses_duplicates_within_incoming() {
    let (updated, added) = merge(&[], vec!["X".to_string(), "x".to_string(), "Y".to_string()]);
    assert_eq!(updated, vec!["X", "Y"]);
    assert_eq!(added, 2);
}

#[test]
fn merge_never_reorders_existing_entries() {
    let existing = vec!["B".to_string(), "A".to_string()];
    let (updated, _) = merge(&existing, vec!["C".to_string()]);
    assert_eq!(updated, vec!["B", "A", "C"]);
}

#[test]
fn add_teams_twice_with_overlap() {
    let mut t = Tournament::new(None);
    assert_eq!(add_teams(&mut t, "Alpha; Beta").unwrap(), 2);
    assert_eq!(add_teams(&mut t, "alpha; Gamma").unwrap(), 1);
    assert_eq!(t.teams, vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn add_teams_rejects_empty_input_without_mutating() {
    let mut t = Tournament::new(None);
    add_teams(&mut t, "Alpha").unwrap();
    assert_eq!(
        add_teams(&mut t, " ; , "),
        Err(TournamentError::EmptyInput)
    );
    assert_eq!(t.teams, vec!["Alpha"]);
}

#[test]
fn new_tournament_name_defaults_when_blank() {
    assert!(Tournament::new(None).name.starts_with("Tournament "));
    assert!(Tournament::new(Some("   ".to_string())).name.starts_with("Tournament "));
    assert_eq!(Tournament::new(Some("  Cup  ".to_string())).name, "Cup");
}
