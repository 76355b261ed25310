//! Click event model for asynchronous click accounting.

use chrono::{DateTime, Utc};

/// A click to be applied to a link's counter.
///
/// Created by the redirect handler after it has chosen the redirect response,
/// then handed to [`crate::domain::click_worker::run_click_worker`] through a
/// bounded channel. The handler never waits for it to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub code: String,
    pub clicked_at: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates a click event stamped with the current time.
    pub fn new(code: impl Into<String>) -> Self {
        Self::at(code, Utc::now())
    }

    /// Creates a click event with an explicit timestamp.
    pub fn at(code: impl Into<String>, clicked_at: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            clicked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_creation() {
        let before = Utc::now();
        let event = ClickEvent::new("abc123");
        let after = Utc::now();

        assert_eq!(event.code, "abc123");
        assert!(event.clicked_at >= before && event.clicked_at <= after);
    }

    #[test]
    fn test_click_event_explicit_timestamp() {
        let ts = Utc::now() - chrono::Duration::minutes(5);
        let event = ClickEvent::at("Xy12Zw".to_string(), ts);

        assert_eq!(event.code, "Xy12Zw");
        assert_eq!(event.clicked_at, ts);
    }
}
