//! Rendering against an in-memory terminal

mod common;

use common::loaded_state;
use ratatui::{backend::TestBackend, Terminal};
use storefront_tui::app::{reduce, Action, AppState};
use storefront_tui::ui;

fn render_to_string(state: &AppState) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>()
}

#[test]
fn test_renders_controls_and_cards() {
    let screen = render_to_string(&loaded_state());

    assert!(screen.contains("All categories"));
    assert!(screen.contains("Sort by: Name"));
    assert!(screen.contains("[Asc]"));
    assert!(screen.contains("Item 01"));
    assert!(screen.contains("Page 1/3"));
}

#[test]
fn test_direction_label_follows_state() {
    let state = reduce(
        loaded_state(),
        Action::Catalog(libstorefront::CatalogEvent::SortDirectionToggled),
    );
    assert!(render_to_string(&state).contains("[Desc]"));
}

#[test]
fn test_loading_message_while_pending() {
    let state = reduce(AppState::new(), Action::ReloadRequested);
    assert!(render_to_string(&state).contains("Loading products..."));
}

#[test]
fn test_empty_catalog_renders_without_pages() {
    let screen = render_to_string(&AppState::new());
    assert!(screen.contains("No products to show"));
    assert!(screen.contains("0 of 0 products"));
}

#[test]
fn test_help_overlay() {
    let state = reduce(AppState::new(), Action::ShowHelp);
    assert!(render_to_string(&state).contains("Keyboard Shortcuts"));
}
