//! Test application initialization and boot sequence
//!
//! Verifies that the app initializes with correct defaults based on
//! environment variables.

use samvad_tui::app::{AppState, Screen};
use serial_test::serial;

#[test]
fn test_app_initializes_to_forum_screen() {
    let state = AppState::new();

    assert_eq!(state.current_screen, Screen::Forum);
    assert!(!state.should_quit);
}

#[test]
fn test_both_screens_start_loading() {
    let state = AppState::new();

    assert!(state.forum.loading);
    assert!(state.thoughts_screen.loading);
}

#[test]
fn test_help_hidden_by_default() {
    let state = AppState::new();

    assert!(!state.help_visible);
}

#[test]
fn test_no_error_on_boot() {
    let state = AppState::new();

    assert!(state.error.is_none());
}

#[test]
fn test_forum_starts_unfiltered() {
    let state = AppState::new();

    assert_eq!(state.forum.search, "");
    assert!(!state.forum.search_focused);
    assert_eq!(state.forum.selected, 0);
    assert!(state.forum.ask_modal.is_none());
    assert!(state.forum.answer_modal.is_none());
}

#[test]
fn test_snapshot_empty_before_first_refresh() {
    let state = AppState::new();

    assert!(state.questions.is_empty());
    assert!(state.thoughts.is_empty());
    assert!(state.visible_questions().is_empty());
    assert!(state.selected_question().is_none());
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_colors_disabled_with_samvad_tui_no_color_env() {
    std::env::set_var("SAMVAD_TUI_NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("SAMVAD_TUI_NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_tick_rate_from_env() {
    std::env::set_var("SAMVAD_TUI_TICK_MS", "250");
    let state = AppState::new();
    std::env::remove_var("SAMVAD_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_tick_rate_default_100ms() {
    std::env::remove_var("SAMVAD_TUI_TICK_MS");
    let state = AppState::new();

    assert_eq!(state.config.tick_rate_ms, 100);
}
