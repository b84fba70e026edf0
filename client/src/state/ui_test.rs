use super::*;

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_tab_is_upload() {
    let state = UiState::default();
    assert_eq!(state.active_tab, Tab::Upload);
}

#[test]
fn select_changes_only_active_tab() {
    let mut state = UiState::default();
    state.select(Tab::Rules);
    assert_eq!(state.active_tab, Tab::Rules);
    state.select(Tab::Export);
    assert_eq!(state.active_tab, Tab::Export);
}

// =============================================================
// Tab
// =============================================================

#[test]
fn tab_default_is_upload() {
    assert_eq!(Tab::default(), Tab::Upload);
}

#[test]
fn tab_all_is_display_order() {
    let values: Vec<&str> = Tab::ALL.iter().map(|t| t.value()).collect();
    assert_eq!(values, vec!["upload", "grid", "validation", "rules", "priority", "export"]);
}

#[test]
fn tab_values_and_labels_are_distinct() {
    let values: std::collections::HashSet<&str> = Tab::ALL.iter().map(|t| t.value()).collect();
    let labels: std::collections::HashSet<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(values.len(), Tab::ALL.len());
    assert_eq!(labels.len(), Tab::ALL.len());
}

#[test]
fn tab_grid_label() {
    assert_eq!(Tab::Grid.label(), "Data Grid");
}

// =============================================================
// PageType
// =============================================================

#[test]
fn page_type_placeholders_differ() {
    assert_ne!(PageType::Grid.placeholder(), PageType::Rules.placeholder());
    assert!(PageType::Rules.placeholder().contains("rule"));
}
