//! Block handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{BlockDto, BlockListQuery, CreateBlockRequest, UpdateBlockRequest};
use crate::application::BlockService;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, ApiResult, EmptyData, ListParams, PaginatedResponse,
    ValidatedJson,
};
use crate::shared::MessageTable;

#[derive(Clone)]
pub struct BlockHandlerState {
    pub service: Arc<BlockService>,
    pub messages: Arc<MessageTable>,
}

#[utoipa::path(
    post,
    path = "/api/v1/block/create",
    tag = "Blocks",
    request_body = CreateBlockRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<BlockDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Parking lot not found")
    )
)]
pub async fn create_block(
    State(state): State<BlockHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateBlockRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BlockDto>>), ApiError> {
    let block = state
        .service
        .create(request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(block.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/block/get-one/{id}",
    tag = "Blocks",
    params(("id" = Uuid, Path, description = "Block ID")),
    responses(
        (status = 200, description = "Block", body = ApiResponse<BlockDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_block(
    State(state): State<BlockHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<BlockDto> {
    let block = state
        .service
        .get(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(block.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/block/get-list",
    tag = "Blocks",
    params(BlockListQuery, ListParams),
    responses(
        (status = 200, description = "Block page", body = PaginatedResponse<BlockDto>),
        (status = 400, description = "Unknown sort column")
    )
)]
pub async fn list_blocks(
    State(state): State<BlockHandlerState>,
    Query(filter): Query<BlockListQuery>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedResponse<BlockDto>>, ApiError> {
    let sort = params.sort().map_err(|e| domain_error(&state.messages, e))?;
    let page = state
        .service
        .list(&filter.into(), params.page(), &sort)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(PaginatedResponse::from_result(page)))
}

#[utoipa::path(
    put,
    path = "/api/v1/block/update/{id}",
    tag = "Blocks",
    params(("id" = Uuid, Path, description = "Block ID")),
    request_body = UpdateBlockRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<BlockDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_block(
    State(state): State<BlockHandlerState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateBlockRequest>,
) -> ApiResult<BlockDto> {
    let block = state
        .service
        .update(id, request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(block.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/block/delete/{id}",
    tag = "Blocks",
    params(("id" = Uuid, Path, description = "Block ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_block(
    State(state): State<BlockHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state
        .service
        .delete(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
