//! Parking slot handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{
    AvailabilityQuery, AvailableBlockDto, CreateParkingSlotRequest, ParkingSlotDto,
    ParkingSlotListQuery, UpdateParkingSlotRequest,
};
use crate::application::ParkingSlotService;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, ApiResult, EmptyData, ListParams, PaginatedResponse,
    ValidatedJson,
};
use crate::shared::MessageTable;

#[derive(Clone)]
pub struct ParkingSlotHandlerState {
    pub service: Arc<ParkingSlotService>,
    pub messages: Arc<MessageTable>,
}

#[utoipa::path(
    post,
    path = "/api/v1/parking-slot/create",
    tag = "Parking Slots",
    request_body = CreateParkingSlotRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ParkingSlotDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Block not found")
    )
)]
pub async fn create_parking_slot(
    State(state): State<ParkingSlotHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateParkingSlotRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ParkingSlotDto>>), ApiError> {
    let slot = state
        .service
        .create(request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(slot.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/parking-slot/get-one/{id}",
    tag = "Parking Slots",
    params(("id" = Uuid, Path, description = "Parking slot ID")),
    responses(
        (status = 200, description = "Parking slot", body = ApiResponse<ParkingSlotDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_parking_slot(
    State(state): State<ParkingSlotHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<ParkingSlotDto> {
    let slot = state
        .service
        .get(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(slot.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/parking-slot/get-list",
    tag = "Parking Slots",
    params(ParkingSlotListQuery, ListParams),
    responses(
        (status = 200, description = "Parking slot page", body = PaginatedResponse<ParkingSlotDto>),
        (status = 400, description = "Unknown sort column")
    )
)]
pub async fn list_parking_slots(
    State(state): State<ParkingSlotHandlerState>,
    Query(filter): Query<ParkingSlotListQuery>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedResponse<ParkingSlotDto>>, ApiError> {
    let sort = params.sort().map_err(|e| domain_error(&state.messages, e))?;
    let page = state
        .service
        .list(&filter.into(), params.page(), &sort)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(PaginatedResponse::from_result(page)))
}

/// Free slots of a lot in `[start, end)`, grouped by block
#[utoipa::path(
    get,
    path = "/api/v1/parking-slot/available",
    tag = "Parking Slots",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Blocks with their free slots", body = ApiResponse<Vec<AvailableBlockDto>>),
        (status = 400, description = "Empty or inverted window")
    )
)]
pub async fn available_parking_slots(
    State(state): State<ParkingSlotHandlerState>,
    Query(query): Query<AvailabilityQuery>,
) -> ApiResult<Vec<AvailableBlockDto>> {
    let blocks = state
        .service
        .available(query.parking_lot_id, query.start, query.end)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(
        blocks.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    put,
    path = "/api/v1/parking-slot/update/{id}",
    tag = "Parking Slots",
    params(("id" = Uuid, Path, description = "Parking slot ID")),
    request_body = UpdateParkingSlotRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ParkingSlotDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_parking_slot(
    State(state): State<ParkingSlotHandlerState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateParkingSlotRequest>,
) -> ApiResult<ParkingSlotDto> {
    let slot = state
        .service
        .update(id, request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(slot.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/parking-slot/delete/{id}",
    tag = "Parking Slots",
    params(("id" = Uuid, Path, description = "Parking slot ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_parking_slot(
    State(state): State<ParkingSlotHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state
        .service
        .delete(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
