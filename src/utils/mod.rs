//! Utility functions for code handling, URL checks, and store error classification.
//!
//! - [`code_generator`] - Short code format validation and random generation
//! - [`url_validator`] - Absolute URL validation for link targets
//! - [`db_error`] - Recognizing unique-constraint violations on `links.code`

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
