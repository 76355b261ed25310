//! Domain layer containing business entities and the store contract.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click accounting event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler resolves the code and decides on the redirect
//! 2. [`click_event::ClickEvent`] is offered to a bounded channel (non-blocking)
//! 3. [`click_worker::run_click_worker`] applies it with an atomic increment
//! 4. Failures are logged and dropped; the redirect was already sent

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
