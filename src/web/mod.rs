//! Web dashboard layer for browser-based UI.
//!
//! Provides HTML pages for link management and statistics.
//! Uses Askama templates for server-side rendering; the pages only call the
//! JSON API and hold no logic of their own.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers and error pages
//! - [`routes`] - Dashboard route configuration
//! - [`view`] - Display models

pub mod handlers;
pub mod routes;
pub mod view;
