//! Core domain entities.
//!
//! The service has a single persisted entity, [`Link`]. Creation input is a
//! separate struct, [`NewLink`], since `id`, `clicks`, and the timestamps are
//! assigned by the store.

pub mod link;

pub use link::{Link, NewLink};
