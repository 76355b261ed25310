//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::code_allocator::CodeAllocator`] - Produces unused short codes
//! - [`services::link_service::LinkService`] - Link creation, lookup, listing, deletion

pub mod services;
