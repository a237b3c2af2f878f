//! Catalog service adapter for the TUI
//!
//! Bridges the async product fetch to the synchronous event loop: fetches
//! run on a tokio runtime owned by the handle, and their outcomes come back
//! over a crossbeam channel tagged with the request id that started them.
//!
//! Dropping the handle shuts the runtime down; a fetch still in flight at
//! that point never reaches any state.

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use libstorefront::service::load_catalog;
use libstorefront::source::{http::HttpProductSource, ProductSource};
use libstorefront::{CatalogEvent, Config};
use std::sync::Arc;

use crate::app::Action;
use crate::error::Result;

/// A finished fetch
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub request_id: u64,
    pub event: CatalogEvent,
}

impl From<LoadOutcome> for Action {
    fn from(outcome: LoadOutcome) -> Self {
        Action::LoadFinished {
            request_id: outcome.request_id,
            event: outcome.event,
        }
    }
}

/// Owns the runtime and product source used by the TUI
pub struct CatalogHandle {
    source: Arc<dyn ProductSource>,
    runtime: tokio::runtime::Runtime,
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
}

impl CatalogHandle {
    /// Create a handle around any product source
    pub fn new(source: Arc<dyn ProductSource>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (tx, rx) = unbounded();

        Ok(Self {
            source,
            runtime,
            tx,
            rx,
        })
    }

    /// Create a handle fetching from the configured API
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpProductSource::new(config.api.base_url.clone())?;
        Self::new(Arc::new(source))
    }

    /// Start fetching the catalog; the outcome arrives via `try_recv`
    pub fn load(&self, request_id: u64) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        tracing::debug!(request_id, source = %source.describe(), "starting catalog fetch");
        self.runtime.spawn(async move {
            let event = load_catalog(source.as_ref()).await;
            if tx.send(LoadOutcome { request_id, event }).is_err() {
                tracing::debug!(request_id, "catalog fetch finished after the view closed");
            }
        });
    }

    /// Next finished fetch, if any
    pub fn try_recv(&self) -> Option<LoadOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Block until the next fetch finishes (tests and headless use)
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<LoadOutcome> {
        self.rx.recv_timeout(timeout).ok()
    }
}
