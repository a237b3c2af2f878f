//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use libstorefront::{CatalogState, CatalogView};

/// Root application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub should_quit: bool,

    pub help_visible: bool,

    /// Filter, sort, page and the fetched products
    pub catalog: CatalogState,

    /// Id of the fetch whose result we are waiting for
    pub pending_request: Option<u64>,

    /// Last fetch id handed out
    pub last_request: u64,

    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("STOREFRONT_TUI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled;

        let tick_rate_ms = std::env::var("STOREFRONT_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_request.is_some()
    }

    /// The catalog as it should be rendered right now
    pub fn view(&self) -> CatalogView<'_> {
        self.catalog.view()
    }
}
