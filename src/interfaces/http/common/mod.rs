//! Shared HTTP plumbing: response envelopes, error mapping and extractors

mod acting_user;
mod validated_json;

pub use acting_user::{parse_user_id, ActingUser, USER_ID_HEADER};
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{DomainError, DomainResult};
use crate::shared::{MessageTable, PageMeta, PageRequest, PaginatedResult, SortSpec};

/// Standard API response envelope
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "...", "message": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// Error detail, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Status text from the message table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(detail.into()),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Empty payload for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// Paginated list envelope: `{"success": true, "data": [...], "meta": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn from_result<D>(result: PaginatedResult<D>) -> Self
    where
        D: Into<T>,
    {
        Self {
            success: true,
            data: result.items.into_iter().map(Into::into).collect(),
            meta: result.meta,
        }
    }
}

/// Paging and sorting query parameters shared by list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListParams {
    /// 1-based page, `0` is treated as `1`
    pub page: Option<u64>,
    /// Rows per page, default 30, capped at 1000
    pub page_size: Option<u64>,
    /// `"<column> [asc|desc]"`, default `created_at desc`
    pub sort: Option<String>,
}

impl ListParams {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    pub fn sort(&self) -> DomainResult<SortSpec> {
        SortSpec::parse(self.sort.as_deref())
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

pub fn status_of(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(
    messages: &MessageTable,
    status: StatusCode,
    detail: impl Into<String>,
) -> ApiError {
    (
        status,
        Json(ApiResponse::error(detail).with_message(messages.get(status))),
    )
}

/// Map a domain error onto its status code and error envelope
pub fn domain_error(messages: &MessageTable, err: DomainError) -> ApiError {
    let status = status_of(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    } else {
        tracing::debug!(error = %err, "Request rejected");
    }
    error_response(messages, status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            status_of(&DomainError::not_found("Ticket", "x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(&DomainError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(&DomainError::Unauthorized("no".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(&DomainError::Timeout(60)), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            status_of(&DomainError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_envelope_carries_detail_and_message() {
        let (status, Json(body)) = domain_error(
            &MessageTable::default(),
            DomainError::not_found("Block", "42"),
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Not found: Block with id=42");
        assert_eq!(json["message"], "Record not found, please check your input");
        assert!(json["data"].is_null());
    }

    #[test]
    fn success_envelope_omits_error_fields() {
        let json = serde_json::to_value(ApiResponse::success(7)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 7}));
    }

    #[test]
    fn list_params_normalize_paging() {
        let params = ListParams {
            page: Some(0),
            page_size: Some(5000),
            sort: Some("name asc".into()),
        };
        let page = params.page();
        assert_eq!((page.page, page.page_size), (1, 1000));
        assert_eq!(params.sort().unwrap().column, "name");
    }
}
