//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Store interface for short links.
///
/// All shared mutable state lives behind this trait, so implementations must
/// provide the atomicity themselves: uniqueness of `code` on insert and a
/// single-statement click increment.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `clicks = 0` and no click timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code already exists. This is
    /// the authoritative uniqueness guard; any earlier existence check is only
    /// an optimization.
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns every link, newest first.
    async fn find_all(&self) -> Result<Vec<Link>, AppError>;

    /// Atomically adds one click and moves `last_clicked_at` forward to
    /// `clicked_at`.
    ///
    /// `last_clicked_at` never moves backwards, even when clicks are applied
    /// out of order.
    ///
    /// Returns `Ok(false)` if no link has this code.
    async fn increment_clicks(
        &self,
        code: &str,
        clicked_at: DateTime<Utc>,
    ) -> Result<bool, AppError>;

    /// Deletes a link.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none matched.
    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Counts stored links.
    async fn count(&self) -> Result<i64, AppError>;

    /// Round-trips to the store and returns its current time.
    async fn health_check(&self) -> Result<DateTime<Utc>, AppError>;
}
