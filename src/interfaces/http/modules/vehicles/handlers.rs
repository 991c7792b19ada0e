//! Vehicle handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleDto, VehicleListQuery};
use crate::application::VehicleService;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, ApiResult, EmptyData, ListParams, PaginatedResponse,
    ValidatedJson,
};
use crate::shared::MessageTable;

#[derive(Clone)]
pub struct VehicleHandlerState {
    pub service: Arc<VehicleService>,
    pub messages: Arc<MessageTable>,
}

#[utoipa::path(
    post,
    path = "/api/v1/vehicle/create",
    tag = "Vehicles",
    request_body = CreateVehicleRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<VehicleDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn create_vehicle(
    State(state): State<VehicleHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleDto>>), ApiError> {
    let vehicle = state
        .service
        .create(request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(vehicle.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicle/get-one/{id}",
    tag = "Vehicles",
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle", body = ApiResponse<VehicleDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_vehicle(
    State(state): State<VehicleHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<VehicleDto> {
    let vehicle = state
        .service
        .get(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(vehicle.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicle/get-list",
    tag = "Vehicles",
    params(VehicleListQuery, ListParams),
    responses(
        (status = 200, description = "Vehicle page", body = PaginatedResponse<VehicleDto>),
        (status = 400, description = "Unknown sort column")
    )
)]
pub async fn list_vehicles(
    State(state): State<VehicleHandlerState>,
    Query(filter): Query<VehicleListQuery>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedResponse<VehicleDto>>, ApiError> {
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
    path = "/api/v1/vehicle/update/{id}",
    tag = "Vehicles",
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    request_body = UpdateVehicleRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<VehicleDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_vehicle(
    State(state): State<VehicleHandlerState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateVehicleRequest>,
) -> ApiResult<VehicleDto> {
    let vehicle = state
        .service
        .update(id, request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(vehicle.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/vehicle/delete/{id}",
    tag = "Vehicles",
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_vehicle(
    State(state): State<VehicleHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state
        .service
        .delete(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
