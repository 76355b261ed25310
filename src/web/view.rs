//! Display models shared by the HTML pages.

use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::entities::Link;
use crate::state::AppState;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// A link with its fields preformatted for templates.
#[derive(Debug, Clone)]
pub struct LinkView {
    pub code: String,
    pub url: String,
    /// Whether `url` may be rendered as a clickable `href`.
    pub linkable: bool,
    pub short_url: String,
    pub clicks: i64,
    pub last_clicked: String,
    pub created: String,
}

impl LinkView {
    pub fn new(link: Link, origin: &str) -> Self {
        Self {
            short_url: format!("{}/{}", origin, link.code),
            last_clicked: link
                .last_clicked_at
                .map(format_timestamp)
                .unwrap_or_else(|| "never".to_string()),
            created: format_timestamp(link.created_at),
            linkable: is_web_url(&link.url),
            code: link.code,
            url: link.url,
            clicks: link.clicks,
        }
    }
}

/// Only http(s) targets are rendered as links; other schemes such as
/// `javascript:` are shown as text.
fn is_web_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Origin prefixed to short codes on the pages.
///
/// `BASE_URL` wins; otherwise the request's `Host` header is used.
pub fn public_origin(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(ref base_url) = state.base_url {
        return base_url.clone();
    }

    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(|host| format!("http://{host}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_link_view_formats_fields() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            0,
            None,
            created,
        );

        let view = LinkView::new(link, "https://s.example.com");

        assert_eq!(view.short_url, "https://s.example.com/abc123");
        assert_eq!(view.last_clicked, "never");
        assert_eq!(view.created, "2025-03-01 12:00:00 UTC");
        assert!(view.linkable);
    }

    #[test]
    fn test_non_web_schemes_not_linkable() {
        for url in ["javascript:alert(1)", "data:text/html,hi", "ftp://example.com/f"] {
            let link = Link::new(
                1,
                "abc123".to_string(),
                url.to_string(),
                0,
                None,
                Utc::now(),
            );
            assert!(!LinkView::new(link, "").linkable, "{url}");
        }
    }

    #[test]
    fn test_link_view_with_click() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let clicked = Utc.with_ymd_and_hms(2025, 3, 2, 8, 30, 5).unwrap();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            4,
            Some(clicked),
            created,
        );

        let view = LinkView::new(link, "");

        assert_eq!(view.short_url, "/abc123");
        assert_eq!(view.clicks, 4);
        assert_eq!(view.last_clicked, "2025-03-02 08:30:05 UTC");
    }
}
