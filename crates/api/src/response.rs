//! Shared response envelope types for API handlers.
//!
//! All API responses use the `{ "success": true, "data": ... }` envelope.
//! List endpoints add pagination metadata (`count`, `page`, `limit`,
//! `totalPages`). Use [`ApiResponse`] instead of ad-hoc
//! `serde_json::json!` blocks to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::data(project)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(rename = "totalPages", skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
}

impl<T: Serialize> ApiResponse<T> {
    /// `{ success: true, data }`.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
            page: None,
            limit: None,
            total_pages: None,
        }
    }

    /// `{ success: true, data, message }`.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::data(data)
        }
    }

    /// `{ success: true, data, count, page, limit, totalPages }`.
    pub fn paginated(data: T, count: i64, page: i64, limit: i64) -> Self {
        Self {
            count: Some(count),
            page: Some(page),
            limit: Some(limit),
            total_pages: Some(total_pages(count, limit)),
            ..Self::data(data)
        }
    }
}

impl ApiResponse<()> {
    /// `{ success: true, message }` with no data payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            count: None,
            page: None,
            limit: None,
            total_pages: None,
        }
    }
}

/// Ceiling division for pagination metadata. Zero rows means zero pages.
fn total_pages(count: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (count + limit - 1) / limit
}
