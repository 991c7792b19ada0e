//! Time frame handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{
    CreateTimeFrameRequest, TimeFrameBatchRequest, TimeFrameDto, TimeFrameLotQuery,
    UpdateTimeFrameRequest,
};
use crate::application::TimeFrameService;
use crate::domain::time_frame::TimeFrame;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, ApiResult, EmptyData, ValidatedJson,
};
use crate::shared::MessageTable;

#[derive(Clone)]
pub struct TimeFrameHandlerState {
    pub service: Arc<TimeFrameService>,
    pub messages: Arc<MessageTable>,
}

fn dtos(frames: Vec<TimeFrame>) -> Vec<TimeFrameDto> {
    frames.into_iter().map(Into::into).collect()
}

#[utoipa::path(
    get,
    path = "/api/v1/time-frame/get-all",
    tag = "Time Frames",
    params(TimeFrameLotQuery),
    responses(
        (status = 200, description = "Frames of the lot, shortest first", body = ApiResponse<Vec<TimeFrameDto>>)
    )
)]
pub async fn list_time_frames(
    State(state): State<TimeFrameHandlerState>,
    Query(query): Query<TimeFrameLotQuery>,
) -> ApiResult<Vec<TimeFrameDto>> {
    let frames = state
        .service
        .list_by_parking_lot(query.parking_lot_id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(dtos(frames))))
}

#[utoipa::path(
    post,
    path = "/api/v1/time-frame/create-multi",
    tag = "Time Frames",
    request_body = TimeFrameBatchRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<Vec<TimeFrameDto>>),
        (status = 400, description = "Empty list or mixed parking lots"),
        (status = 404, description = "Parking lot not found")
    )
)]
pub async fn create_time_frames(
    State(state): State<TimeFrameHandlerState>,
    ValidatedJson(request): ValidatedJson<TimeFrameBatchRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<TimeFrameDto>>>), ApiError> {
    let frames = state
        .service
        .create_many(request.into_frames())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(dtos(frames)))))
}

/// Replace every frame of the lot in one transaction
#[utoipa::path(
    put,
    path = "/api/v1/time-frame/update",
    tag = "Time Frames",
    request_body = TimeFrameBatchRequest,
    responses(
        (status = 200, description = "New pricing table", body = ApiResponse<Vec<TimeFrameDto>>),
        (status = 400, description = "Empty list or mixed parking lots"),
        (status = 404, description = "Parking lot not found")
    )
)]
pub async fn replace_time_frames(
    State(state): State<TimeFrameHandlerState>,
    ValidatedJson(request): ValidatedJson<TimeFrameBatchRequest>,
) -> ApiResult<Vec<TimeFrameDto>> {
    let frames = state
        .service
        .replace(request.into_frames())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(dtos(frames))))
}

#[utoipa::path(
    post,
    path = "/api/v1/time-frame/create",
    tag = "Time Frames",
    request_body = CreateTimeFrameRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<TimeFrameDto>),
        (status = 404, description = "Parking lot not found")
    )
)]
pub async fn create_time_frame(
    State(state): State<TimeFrameHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateTimeFrameRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TimeFrameDto>>), ApiError> {
    let frame = state
        .service
        .create(request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(frame.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/time-frame/get-one/{id}",
    tag = "Time Frames",
    params(("id" = Uuid, Path, description = "Time frame ID")),
    responses(
        (status = 200, description = "Time frame", body = ApiResponse<TimeFrameDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_time_frame(
    State(state): State<TimeFrameHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<TimeFrameDto> {
    let frame = state
        .service
        .get(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(frame.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/time-frame/update/{id}",
    tag = "Time Frames",
    params(("id" = Uuid, Path, description = "Time frame ID")),
    request_body = UpdateTimeFrameRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<TimeFrameDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_time_frame(
    State(state): State<TimeFrameHandlerState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateTimeFrameRequest>,
) -> ApiResult<TimeFrameDto> {
    let frame = state
        .service
        .update(id, request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(frame.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/time-frame/delete/{id}",
    tag = "Time Frames",
    params(("id" = Uuid, Path, description = "Time frame ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_time_frame(
    State(state): State<TimeFrameHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state
        .service
        .delete(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
