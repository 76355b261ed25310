//! HTML template rendering handlers for the web dashboard.

mod code_stats;
mod dashboard;
pub mod pages;

pub use code_stats::code_stats_handler;
pub use dashboard::dashboard_handler;
pub use pages::not_found_handler;
