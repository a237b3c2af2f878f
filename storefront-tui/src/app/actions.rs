//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Catalog changes are
//! carried as `CatalogEvent`s so the catalog's own transition function
//! stays the single place they are interpreted.

use crossterm::event::KeyEvent;
use libstorefront::CatalogEvent;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    Quit,

    ShowHelp,

    HideHelp,

    // === Catalog ===
    /// A user-driven catalog change (filter, sort, page)
    Catalog(CatalogEvent),

    /// Start a new product fetch; supersedes any pending one
    ReloadRequested,

    /// A fetch finished. Applied only if `request_id` is still pending.
    LoadFinished {
        request_id: u64,
        event: CatalogEvent,
    },
}
