//! `x-user-id` extractor
//!
//! The gateway in front of the service authenticates the caller and forwards
//! their id in `x-user-id`, either as a bare UUID or as `uuid|suffix`.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::StatusCode;
use uuid::Uuid;

use super::{error_response, ApiError};
use crate::shared::MessageTable;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Id of the user the request acts for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser(pub Uuid);

/// Parse `uuid` or `uuid|suffix`
pub fn parse_user_id(raw: &str) -> Option<Uuid> {
    let id = raw.split('|').next()?.trim();
    Uuid::parse_str(id).ok().filter(|id| !id.is_nil())
}

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
    Arc<MessageTable>: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok());

        match raw.and_then(parse_user_id) {
            Some(id) => Ok(ActingUser(id)),
            None => {
                let messages = Arc::<MessageTable>::from_ref(state);
                Err(error_response(
                    &messages,
                    StatusCode::UNAUTHORIZED,
                    "missing or invalid x-user-id header",
                ))
            }
        }
    }
}
