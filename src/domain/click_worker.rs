//! Background worker applying click events to the store.
//!
//! Click accounting is best-effort. A failed update is logged and counted,
//! then dropped: there is no retry and no dead-letter queue, so click counts
//! may undercount while the store is unavailable.

use std::sync::Arc;

use metrics::counter;
use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, error, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Result of applying a single click event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Recorded,
    /// The link was deleted between the redirect and the update.
    LinkMissing,
    Failed,
}

/// Applies one click event to the store.
///
/// Never returns an error; failures are logged and reported as
/// [`ClickOutcome::Failed`].
pub async fn apply_click<R>(repository: &R, event: ClickEvent) -> ClickOutcome
where
    R: LinkRepository + ?Sized,
{
    match repository
        .increment_clicks(&event.code, event.clicked_at)
        .await
    {
        Ok(true) => {
            debug!(code = %event.code, "Click recorded");
            ClickOutcome::Recorded
        }
        Ok(false) => {
            warn!(code = %event.code, "Click for a link that no longer exists");
            ClickOutcome::LinkMissing
        }
        Err(e) => {
            counter!("tinylink_click_updates_failed_total").increment(1);
            error!(code = %event.code, error = %e, "Failed to record click");
            ClickOutcome::Failed
        }
    }
}

/// Consumes click events until the channel closes.
///
/// Up to `concurrency` updates run at once. After the last sender is dropped
/// the worker waits for in-flight updates before returning, so awaiting this
/// future at shutdown drains everything that was queued.
pub async fn run_click_worker<R>(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<R>,
    concurrency: usize,
) where
    R: LinkRepository + ?Sized + 'static,
{
    let concurrency = concurrency.max(1);
    let permits = Arc::new(Semaphore::new(concurrency));

    while let Some(event) = rx.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };

        let repository = repository.clone();
        tokio::spawn(async move {
            let _permit = permit;
            apply_click(repository.as_ref(), event).await;
        });
    }

    // Every task holds a permit until it finishes.
    let _ = permits.acquire_many(concurrency as u32).await;
    info!("Click worker stopped");
}
