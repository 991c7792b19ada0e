//! Company handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{
    CompanyDto, CompanyLoginRequest, CompanyLoginResponse, CreateCompanyRequest,
    UpdateCompanyRequest, UpdatePasswordRequest,
};
use crate::application::CompanyService;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, ApiResult, EmptyData, ValidatedJson,
};
use crate::shared::MessageTable;

#[derive(Clone)]
pub struct CompanyHandlerState {
    pub service: Arc<CompanyService>,
    pub messages: Arc<MessageTable>,
}

#[utoipa::path(
    post,
    path = "/api/merchant/company/create",
    tag = "Merchant",
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Registered", body = ApiResponse<CompanyDto>),
        (status = 400, description = "Validation error or email already registered")
    )
)]
pub async fn create_company(
    State(state): State<CompanyHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CompanyDto>>), ApiError> {
    let company = state
        .service
        .create(request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(company.into()))))
}

#[utoipa::path(
    post,
    path = "/api/merchant/company/login",
    tag = "Merchant",
    request_body = CompanyLoginRequest,
    responses(
        (status = 200, description = "Access token", body = ApiResponse<CompanyLoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn company_login(
    State(state): State<CompanyHandlerState>,
    ValidatedJson(request): ValidatedJson<CompanyLoginRequest>,
) -> ApiResult<CompanyLoginResponse> {
    let login = state
        .service
        .login(&request.email, &request.password)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(login.into())))
}

#[utoipa::path(
    get,
    path = "/api/merchant/company/get-one/{id}",
    tag = "Merchant",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company", body = ApiResponse<CompanyDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_company(
    State(state): State<CompanyHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<CompanyDto> {
    let company = state
        .service
        .get(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(company.into())))
}

#[utoipa::path(
    put,
    path = "/api/merchant/company/update/{id}",
    tag = "Merchant",
    params(("id" = Uuid, Path, description = "Company ID")),
    request_body = UpdateCompanyRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<CompanyDto>),
        (status = 400, description = "Email belongs to another company"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_company(
    State(state): State<CompanyHandlerState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateCompanyRequest>,
) -> ApiResult<CompanyDto> {
    let company = state
        .service
        .update(id, request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(company.into())))
}

#[utoipa::path(
    put,
    path = "/api/merchant/company/update-password/{id}",
    tag = "Merchant",
    params(("id" = Uuid, Path, description = "Company ID")),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse<EmptyData>),
        (status = 400, description = "Current password is incorrect"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_company_password(
    State(state): State<CompanyHandlerState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdatePasswordRequest>,
) -> ApiResult<EmptyData> {
    state
        .service
        .update_password(id, &request.old_password, &request.new_password)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
