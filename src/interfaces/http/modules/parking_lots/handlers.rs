//! Parking lot handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{
    CompanyParkingLotQuery, CreateParkingLotRequest, ParkingLotDto, ParkingLotListQuery,
    UpdateParkingLotRequest,
};
use crate::application::ParkingLotService;
use crate::domain::parking_lot::ParkingLotFilter;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, ApiResult, EmptyData, ListParams, PaginatedResponse,
    ValidatedJson,
};
use crate::shared::MessageTable;

#[derive(Clone)]
pub struct ParkingLotHandlerState {
    pub service: Arc<ParkingLotService>,
    pub messages: Arc<MessageTable>,
}

impl ParkingLotHandlerState {
    async fn page(
        &self,
        filter: ParkingLotFilter,
        params: ListParams,
    ) -> Result<Json<PaginatedResponse<ParkingLotDto>>, ApiError> {
        let sort = params.sort().map_err(|e| domain_error(&self.messages, e))?;
        let page = self
            .service
            .list(&filter, params.page(), &sort)
            .await
            .map_err(|e| domain_error(&self.messages, e))?;
        Ok(Json(PaginatedResponse::from_result(page)))
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/parking-lot/create",
    tag = "Parking Lots",
    request_body = CreateParkingLotRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ParkingLotDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn create_parking_lot(
    State(state): State<ParkingLotHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateParkingLotRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ParkingLotDto>>), ApiError> {
    let lot = state
        .service
        .create(request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(lot.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/parking-lot/get-one/{id}",
    tag = "Parking Lots",
    params(("id" = Uuid, Path, description = "Parking lot ID")),
    responses(
        (status = 200, description = "Parking lot", body = ApiResponse<ParkingLotDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_parking_lot(
    State(state): State<ParkingLotHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<ParkingLotDto> {
    let lot = state
        .service
        .get(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(lot.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/parking-lot/get-list",
    tag = "Parking Lots",
    params(ParkingLotListQuery, ListParams),
    responses(
        (status = 200, description = "Parking lot page", body = PaginatedResponse<ParkingLotDto>),
        (status = 400, description = "Unknown sort column")
    )
)]
pub async fn list_parking_lots(
    State(state): State<ParkingLotHandlerState>,
    Query(filter): Query<ParkingLotListQuery>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedResponse<ParkingLotDto>>, ApiError> {
    state.page(filter.into(), params).await
}

#[utoipa::path(
    get,
    path = "/api/merchant/parking-lot/get-list",
    tag = "Merchant",
    params(CompanyParkingLotQuery, ListParams),
    responses(
        (status = 200, description = "Parking lots of the company", body = PaginatedResponse<ParkingLotDto>),
        (status = 400, description = "Missing company_id")
    )
)]
pub async fn list_company_parking_lots(
    State(state): State<ParkingLotHandlerState>,
    Query(query): Query<CompanyParkingLotQuery>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedResponse<ParkingLotDto>>, ApiError> {
    let filter = ParkingLotFilter {
        name: query.name,
        company_id: Some(query.company_id),
    };
    state.page(filter, params).await
}

#[utoipa::path(
    put,
    path = "/api/v1/parking-lot/update/{id}",
    tag = "Parking Lots",
    params(("id" = Uuid, Path, description = "Parking lot ID")),
    request_body = UpdateParkingLotRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ParkingLotDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_parking_lot(
    State(state): State<ParkingLotHandlerState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateParkingLotRequest>,
) -> ApiResult<ParkingLotDto> {
    let lot = state
        .service
        .update(id, request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(lot.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/parking-lot/delete/{id}",
    tag = "Parking Lots",
    params(("id" = Uuid, Path, description = "Parking lot ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_parking_lot(
    State(state): State<ParkingLotHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state
        .service
        .delete(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
