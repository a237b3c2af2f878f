//! storefront-tui - Terminal UI for Storefront
//!
//! Browse the product catalog: filter by category, sort by name or price,
//! and page through the results.

use clap::Parser;
use libstorefront::config::{resolve_cache_path, Config};
use libstorefront::logging::LoggingConfig;
use std::path::PathBuf;
use storefront_tui::{
    app::{event::EventHandler, reduce, Action, AppState},
    error::Result,
    services::CatalogHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

#[derive(Parser, Debug)]
#[command(name = "storefront-tui")]
#[command(version, about = "Browse the product catalog in your terminal")]
struct Args {
    /// Path to config file (defaults to ~/.config/storefront/config.toml)
    #[arg(long, env = "STOREFRONT_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Root URL of the storefront API
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Write logs to this file (defaults to the cache directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_path(path)?.with_env_overrides(),
        None => Config::load()?,
    };
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }

    // Logs never go to the terminal the UI is drawing on
    let log_file = match args.log_file.or_else(|| config.log_file()) {
        Some(path) => path,
        None => resolve_cache_path()?.join("storefront-tui.log"),
    };
    LoggingConfig::new(config.logging.format, config.logging.level.clone(), false)
        .with_file(log_file)
        .init()?;

    tracing::info!(api = %config.api.base_url, "starting storefront-tui");
    let services = CatalogHandle::from_config(&config)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &services);
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, services: &CatalogHandle) -> Result<()> {
    let mut state = AppState::new();
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // Initial fetch
    state = dispatch(state, Action::ReloadRequested, services);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action: Action = event_handler.next()?.into();
        state = dispatch(state, action, services);

        while let Some(outcome) = services.try_recv() {
            state = dispatch(state, outcome.into(), services);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Reduce one action, then start a fetch if it created a new pending request
fn dispatch(state: AppState, action: Action, services: &CatalogHandle) -> AppState {
    let before = state.pending_request;
    let state = reduce(state, action);

    if let Some(request_id) = state.pending_request {
        if before != Some(request_id) {
            services.load(request_id);
        }
    }
    state
}
