//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::application::services::LinkService;
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// State cloned into each request.
///
/// The store is held behind a trait object so the same router serves the
/// PostgreSQL and in-memory backends.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    /// Producer side of the click queue consumed by the click worker.
    pub click_sender: mpsc::Sender<ClickEvent>,
    pub started_at: Instant,
    /// Environment name reported by `/healthz`.
    pub environment: String,
    /// Public origin for displaying short links. The request `Host` is used
    /// when unset.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_sender: mpsc::Sender<ClickEvent>,
        environment: impl Into<String>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            click_sender,
            started_at: Instant::now(),
            environment: environment.into(),
            base_url,
        }
    }

    /// Whole seconds since the state was built.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
