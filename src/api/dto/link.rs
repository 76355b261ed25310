//! DTOs for the link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;
use crate::utils::code_generator::CODE_REGEX;

/// Body of `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Target URL, stored exactly as sent.
    #[validate(url(message = "Invalid URL"))]
    pub url: String,

    /// Optional custom short code. Generated when absent or empty.
    #[serde(default)]
    #[validate(regex(path = *CODE_REGEX, message = "code must match [A-Za-z0-9]{6,8}"))]
    pub code: Option<String>,
}

impl CreateLinkRequest {
    /// Treats `"code": ""` the same as a missing code.
    pub fn normalized(mut self) -> Self {
        self.code = self.code.filter(|code| !code.is_empty());
        self
    }
}

/// JSON representation of a link.
///
/// Timestamps are serialized as RFC 3339 strings; `lastClickedAt` is `null`
/// until the first recorded click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            url: link.url,
            clicks: link.clicks,
            last_clicked_at: link.last_clicked_at,
            created_at: link.created_at,
        }
    }
}

/// Body returned by `DELETE /api/links/{code}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_response_uses_camel_case() {
        let created_at = Utc::now();
        let link = Link::new(
            7,
            "abc123".to_string(),
            "https://example.com".to_string(),
            0,
            None,
            created_at,
        );

        let value = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["code"], "abc123");
        assert_eq!(value["clicks"], 0);
        assert!(value["lastClickedAt"].is_null());
        assert!(value["createdAt"].is_string());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_create_request_validation() {
        let ok: CreateLinkRequest =
            serde_json::from_value(json!({ "url": "https://example.com", "code": "Abc123" }))
                .unwrap();
        assert!(ok.validate().is_ok());

        let bad_url: CreateLinkRequest =
            serde_json::from_value(json!({ "url": "example.com" })).unwrap();
        let errors = bad_url.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));

        let bad_code: CreateLinkRequest =
            serde_json::from_value(json!({ "url": "https://example.com", "code": "ab-12" }))
                .unwrap();
        let errors = bad_code.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("code"));
    }

    #[test]
    fn test_empty_code_is_absent() {
        let request: CreateLinkRequest =
            serde_json::from_value(json!({ "url": "https://example.com", "code": "" })).unwrap();

        let request = request.normalized();

        assert!(request.code.is_none());
        assert!(request.validate().is_ok());
    }
}
