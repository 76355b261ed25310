//! Short code allocation.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_code};
use serde_json::json;
use tracing::{debug, warn};

/// Total number of random candidates tried before giving up.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 5;

/// Root path segments served by static routes. A link under one of these
/// codes could never be reached through `GET /{code}`.
pub const RESERVED_CODES: &[&str] = &["healthz"];

pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Produces a valid code that is not currently in use.
///
/// The existence check here only avoids a doomed insert. Two concurrent
/// allocations can still pick the same code; the store's unique constraint
/// rejects the loser at insert time.
pub struct CodeAllocator<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> CodeAllocator<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Validates a caller-supplied code or generates a random one.
    ///
    /// An empty `requested` code is treated the same as `None`.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidCode`] if the supplied code is malformed
    /// - [`AppError::CodeConflict`] if the supplied code is taken
    /// - [`AppError::AllocationExhausted`] after [`MAX_ALLOCATION_ATTEMPTS`]
    ///   colliding random candidates
    /// - [`AppError::StoreUnavailable`] if the existence check fails
    pub async fn allocate(&self, requested: Option<String>) -> Result<String, AppError> {
        match requested.filter(|code| !code.is_empty()) {
            Some(code) => self.claim(code).await,
            None => self.generate_unique().await,
        }
    }

    async fn claim(&self, code: String) -> Result<String, AppError> {
        validate_code(&code)?;

        if is_reserved_code(&code) {
            return Err(AppError::conflict(
                "Code is reserved",
                json!({ "code": code }),
            ));
        }

        if self.link_repository.find_by_code(&code).await?.is_some() {
            return Err(AppError::conflict(
                "Code already exists",
                json!({ "code": code }),
            ));
        }

        Ok(code)
    }

    async fn generate_unique(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let candidate = generate_code();

            if !is_reserved_code(&candidate)
                && self.link_repository.find_by_code(&candidate).await?.is_none()
            {
                debug!(code = %candidate, attempt, "Allocated short code");
                return Ok(candidate);
            }

            warn!(code = %candidate, attempt, "Generated code collided");
        }

        Err(AppError::allocation_exhausted(
            "Failed to generate code",
            json!({ "attempts": MAX_ALLOCATION_ATTEMPTS }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkRepository;
    use crate::utils::code_generator::is_valid_code;
    use chrono::Utc;

    fn existing(code: &str) -> Link {
        Link::new(
            1,
            code.to_string(),
            "https://example.com".to_string(),
            0,
            None,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_allocate_custom_code_unused() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .withf(|code| code == "MyCode12")
            .times(1)
            .returning(|_| Ok(None));

        let allocator = CodeAllocator::new(Arc::new(repo));
        let code = allocator.allocate(Some("MyCode12".to_string())).await.unwrap();

        assert_eq!(code, "MyCode12");
    }

    #[tokio::test]
    async fn test_allocate_custom_code_taken() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(existing(code))));

        let allocator = CodeAllocator::new(Arc::new(repo));
        let err = allocator
            .allocate(Some("taken1".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::CodeConflict { .. }));
    }

    #[tokio::test]
    async fn test_allocate_malformed_code_skips_store() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(0);

        let allocator = CodeAllocator::new(Arc::new(repo));

        for bad in ["abc12", "abc-123", "abcdefghi", "ab cd12"] {
            let err = allocator.allocate(Some(bad.to_string())).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidCode { .. }), "{bad}");
        }
    }

    #[tokio::test]
    async fn test_allocate_reserved_code_skips_store() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(0);

        let allocator = CodeAllocator::new(Arc::new(repo));
        let err = allocator
            .allocate(Some("healthz".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::CodeConflict { .. }));
    }

    #[tokio::test]
    async fn test_allocate_empty_code_generates() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let allocator = CodeAllocator::new(Arc::new(repo));
        let code = allocator.allocate(Some(String::new())).await.unwrap();

        assert_eq!(code.len(), 6);
        assert!(is_valid_code(&code));
    }

    #[tokio::test]
    async fn test_allocate_generated_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let allocator = CodeAllocator::new(Arc::new(repo));
        let code = allocator.allocate(None).await.unwrap();

        assert_eq!(code.len(), 6);
        assert!(is_valid_code(&code));
    }

    #[tokio::test]
    async fn test_allocate_retries_after_collision() {
        let mut repo = MockLinkRepository::new();
        let mut seq = mockall::Sequence::new();
        repo.expect_find_by_code()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|code| Ok(Some(existing(code))));
        repo.expect_find_by_code()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        let allocator = CodeAllocator::new(Arc::new(repo));
        assert!(allocator.allocate(None).await.is_ok());
    }

    #[tokio::test]
    async fn test_allocate_exhausted_after_five_collisions() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .times(MAX_ALLOCATION_ATTEMPTS)
            .returning(|code| Ok(Some(existing(code))));

        let allocator = CodeAllocator::new(Arc::new(repo));
        let err = allocator.allocate(None).await.unwrap_err();

        assert!(matches!(err, AppError::AllocationExhausted { .. }));
    }

    #[tokio::test]
    async fn test_allocate_store_error_propagates() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(|_| Err(AppError::store_unavailable("down", json!({}))));

        let allocator = CodeAllocator::new(Arc::new(repo));
        let err = allocator.allocate(None).await.unwrap_err();

        assert!(matches!(err, AppError::StoreUnavailable { .. }));
    }
}
