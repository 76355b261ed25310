//! Link creation, lookup, listing, and deletion.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::info;

use crate::application::services::code_allocator::CodeAllocator;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::validate_code;
use crate::utils::url_validator::validate_url;

/// Store round-trip result reported by the DB check endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    pub now: DateTime<Utc>,
    pub link_count: i64,
}

/// Service for managing short links.
///
/// All validation happens here, before any store call. Handlers and the admin
/// CLI go through this service rather than the repository.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    allocator: CodeAllocator<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self {
            allocator: CodeAllocator::new(link_repository.clone()),
            link_repository,
        }
    }

    /// Returns the repository backing this service.
    pub fn repository(&self) -> Arc<L> {
        self.link_repository.clone()
    }

    /// Creates a short link.
    ///
    /// The URL is stored exactly as given once it parses as an absolute URL.
    /// A caller-supplied code is used verbatim; otherwise a random 6-character
    /// code is allocated.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `url` is not an absolute URL
    /// - [`AppError::InvalidCode`] if `custom_code` is malformed
    /// - [`AppError::CodeConflict`] if the code is taken, including when a
    ///   concurrent create wins the insert
    /// - [`AppError::AllocationExhausted`] if no free code was found
    /// - [`AppError::StoreUnavailable`] on store errors
    pub async fn create_link(
        &self,
        url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_url(&url)?;

        let code = self.allocator.allocate(custom_code).await?;

        let link = self.link_repository.insert(NewLink { code, url }).await?;

        info!(code = %link.code, id = link.id, "Link created");
        Ok(link)
    }

    /// Retrieves a link by its short code. Does not count as a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCode`] if the code is malformed.
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        validate_code(code)?;

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.find_all().await
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCode`] if the code is malformed.
    /// Returns [`AppError::NotFound`] if no link matched; nothing is changed.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        validate_code(code)?;

        if !self.link_repository.delete_by_code(code).await? {
            return Err(AppError::not_found(
                "Link not found",
                json!({ "code": code }),
            ));
        }

        info!(code = %code, "Link deleted");
        Ok(())
    }

    /// Checks the store and reports its clock and link count.
    pub async fn store_status(&self) -> Result<StoreStatus, AppError> {
        let now = self.link_repository.health_check().await?;
        let link_count = self.link_repository.count().await?;

        Ok(StoreStatus { now, link_count })
    }
}
