//! Favorite handlers. All routes act for the `x-user-id` caller.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{CreateFavoriteRequest, FavoriteDto};
use crate::application::FavoriteService;
use crate::interfaces::http::common::{
    domain_error, ActingUser, ApiError, ApiResponse, ApiResult, EmptyData, ValidatedJson,
};
use crate::shared::MessageTable;

#[derive(Clone)]
pub struct FavoriteHandlerState {
    pub service: Arc<FavoriteService>,
    pub messages: Arc<MessageTable>,
}

#[utoipa::path(
    post,
    path = "/api/v1/favorite/create",
    tag = "Favorites",
    params(("x-user-id" = String, Header, description = "Acting user id")),
    request_body = CreateFavoriteRequest,
    responses(
        (status = 201, description = "Saved (or already saved)", body = ApiResponse<FavoriteDto>),
        (status = 401, description = "Missing x-user-id"),
        (status = 404, description = "Parking lot not found")
    )
)]
pub async fn create_favorite(
    State(state): State<FavoriteHandlerState>,
    ActingUser(user_id): ActingUser,
    ValidatedJson(request): ValidatedJson<CreateFavoriteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FavoriteDto>>), ApiError> {
    let favorite = state
        .service
        .create(user_id, request.parking_lot_id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(favorite.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/favorite/get-all",
    tag = "Favorites",
    params(("x-user-id" = String, Header, description = "Acting user id")),
    responses(
        (status = 200, description = "Favorites with their lots, newest first", body = ApiResponse<Vec<FavoriteDto>>),
        (status = 401, description = "Missing x-user-id")
    )
)]
pub async fn list_favorites(
    State(state): State<FavoriteHandlerState>,
    ActingUser(user_id): ActingUser,
) -> ApiResult<Vec<FavoriteDto>> {
    let favorites = state
        .service
        .list(user_id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(
        favorites.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/favorite/delete/{parking_lot_id}",
    tag = "Favorites",
    params(
        ("x-user-id" = String, Header, description = "Acting user id"),
        ("parking_lot_id" = Uuid, Path, description = "Saved parking lot")
    ),
    responses(
        (status = 200, description = "Removed", body = ApiResponse<EmptyData>),
        (status = 401, description = "Missing x-user-id"),
        (status = 404, description = "Lot is not a favorite of the user")
    )
)]
pub async fn delete_favorite(
    State(state): State<FavoriteHandlerState>,
    ActingUser(user_id): ActingUser,
    Path(parking_lot_id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state
        .service
        .delete(user_id, parking_lot_id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
