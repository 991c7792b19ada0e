//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value. Both
//! malformed JSON and failed validation answer 400 with the field-level
//! details joined into the error envelope.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, FromRequest};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error_response;
use crate::shared::MessageTable;

/// An extractor that deserializes JSON and validates it.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateBlock {
///     #[validate(length(min = 1, max = 50))]
///     code: String,
/// }
///
/// async fn handler(ValidatedJson(body): ValidatedJson<CreateBlock>) {
///     // `body` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// Error type for `ValidatedJson` extraction failures.
pub struct ValidatedJsonRejection {
    messages: Arc<MessageTable>,
    detail: String,
}

impl ValidatedJsonRejection {
    fn json(messages: Arc<MessageTable>, rejection: JsonRejection) -> Self {
        Self {
            messages,
            detail: format!("Invalid JSON: {}", rejection.body_text()),
        }
    }

    fn validation(messages: Arc<MessageTable>, errors: validator::ValidationErrors) -> Self {
        let field_errors: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, msg)
                })
            })
            .collect();

        let detail = if field_errors.is_empty() {
            "Validation failed".to_string()
        } else {
            field_errors.join("; ")
        };
        Self { messages, detail }
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        error_response(&self.messages, StatusCode::BAD_REQUEST, self.detail).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Arc<MessageTable>: FromRef<S>,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ValidatedJsonRejection::json(Arc::from_ref(state), e))?;

        value
            .validate()
            .map_err(|e| ValidatedJsonRejection::validation(Arc::from_ref(state), e))?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, max = 10))]
        code: String,
        #[validate(range(min = 1, max = 100))]
        slot: u32,
    }

    async fn handler(ValidatedJson(_body): ValidatedJson<TestBody>) -> &'static str {
        "ok"
    }

    async fn send(body: Body) -> axum::http::Response<Body> {
        use tower::Service;
        let mut svc = Router::new()
            .route("/test", post(handler))
            .with_state(Arc::new(MessageTable::default()))
            .into_service();
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        svc.call(req).await.unwrap()
    }

    #[tokio::test]
    async fn valid_body_returns_ok() {
        let body = serde_json::json!({"code": "A", "slot": 30});
        let resp = send(Body::from(serde_json::to_vec(&body).unwrap())).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_json_returns_400() {
        let resp = send(Body::from("not json")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn validation_failure_returns_400_with_fields() {
        let body = serde_json::json!({"code": "", "slot": 0});
        let resp = send(Body::from(serde_json::to_vec(&body).unwrap())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let detail = json["error"].as_str().unwrap();
        assert!(detail.contains("code"));
        assert!(detail.contains("slot"));
        assert_eq!(json["message"], "Something went wrong with your request");
    }
}
