//! Repository trait definitions for the domain layer.
//!
//! [`LinkRepository`] is the store contract the services are written against.
//! Implementations live in `crate::infrastructure::persistence`; a mock is
//! generated with `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
