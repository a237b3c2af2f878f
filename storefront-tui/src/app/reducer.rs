//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, with no I/O. Fetching happens in the event
//! loop, which watches `pending_request` and reports back with
//! `Action::LoadFinished`.

use super::actions::Action;
use super::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libstorefront::{CatalogEvent, CATEGORY_OPTIONS};

/// Pure reducer function
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state,

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::Catalog(event) => AppState {
            catalog: state.catalog.apply(event),
            ..state
        },

        Action::ReloadRequested => {
            let request_id = state.last_request + 1;
            AppState {
                pending_request: Some(request_id),
                last_request: request_id,
                ..state
            }
        }

        Action::LoadFinished { request_id, event } => {
            if state.pending_request != Some(request_id) {
                // Superseded or unknown request
                return state;
            }
            AppState {
                catalog: state.catalog.apply(event),
                pending_request: None,
                ..state
            }
        }
    }
}

/// Map keys to actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }
        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }
        _ => {}
    }

    // Help overlay swallows everything else
    if state.help_visible {
        return state;
    }

    match catalog_action(&state, key) {
        Some(action) => reduce(state, action),
        None => state,
    }
}

fn catalog_action(state: &AppState, key: KeyEvent) -> Option<Action> {
    let catalog = &state.catalog;
    let page = catalog.page_number;
    let page_count = catalog.view().page_count;

    let event = match key.code {
        KeyCode::Char('c') => CatalogEvent::CategoryChanged(cycle_category(&catalog.selected_category, true)),
        KeyCode::Char('C') => CatalogEvent::CategoryChanged(cycle_category(&catalog.selected_category, false)),
        KeyCode::Char('s') => CatalogEvent::SortByChanged(catalog.sort_by.next()),
        KeyCode::Char('d') => CatalogEvent::SortDirectionToggled,
        KeyCode::Char('r') => return Some(Action::ReloadRequested),

        KeyCode::Left | KeyCode::Char('h') if page > 0 => CatalogEvent::PageChanged(page - 1),
        KeyCode::Right | KeyCode::Char('l') if page.saturating_add(1) < page_count => {
            CatalogEvent::PageChanged(page + 1)
        }
        KeyCode::Home if page_count > 0 && page != 0 => CatalogEvent::PageChanged(0),
        KeyCode::End if page_count > 0 && page != page_count - 1 => {
            CatalogEvent::PageChanged(page_count - 1)
        }
        KeyCode::Char(digit @ '1'..='9') => {
            let target = digit as usize - '1' as usize;
            if target >= page_count || target == page {
                return None;
            }
            CatalogEvent::PageChanged(target)
        }
        _ => return None,
    };

    Some(Action::Catalog(event))
}

/// Next (or previous) category value in selector order, wrapping around
fn cycle_category(current: &str, forward: bool) -> String {
    let len = CATEGORY_OPTIONS.len();
    let next = match CATEGORY_OPTIONS.iter().position(|(value, _)| *value == current) {
        Some(index) if forward => (index + 1) % len,
        Some(index) => (index + len - 1) % len,
        None => 0,
    };
    CATEGORY_OPTIONS[next].0.to_string()
}
