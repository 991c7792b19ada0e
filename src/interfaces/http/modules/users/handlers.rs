//! User handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{
    CheckPhoneRequest, CheckPhoneResponse, CreateUserRequest, LoginRequest, LoginResponse,
    RefreshRequest, ResetPasswordRequest, TokenResponse, UpdateUserRequest, UserDto,
};
use crate::application::{AuthService, UserService};
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, ApiResult, EmptyData, ValidatedJson,
};
use crate::shared::MessageTable;

#[derive(Clone)]
pub struct UserHandlerState {
    pub users: Arc<UserService>,
    pub auth: Arc<AuthService>,
    pub messages: Arc<MessageTable>,
}

#[utoipa::path(
    post,
    path = "/api/v1/user/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Access and refresh tokens", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let result = state
        .auth
        .login(&request.phone_number, &request.password)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(result.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/user/refresh",
    tag = "Users",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New access token", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Unknown or expired refresh token")
    )
)]
pub async fn refresh_token(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<RefreshRequest>,
) -> ApiResult<TokenResponse> {
    let token = state
        .auth
        .refresh(&request.refresh_token)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(token.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/user/reset-password",
    tag = "Users",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse<EmptyData>),
        (status = 404, description = "No user with that phone number")
    )
)]
pub async fn reset_password(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<EmptyData> {
    state
        .auth
        .reset_password(&request.phone_number, &request.password)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    post,
    path = "/api/v1/user/create",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Registered", body = ApiResponse<UserDto>),
        (status = 400, description = "Validation error or phone already registered")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ApiError> {
    let user = state
        .users
        .create(request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user.into()))))
}

#[utoipa::path(
    post,
    path = "/api/v1/user/check-phone",
    tag = "Users",
    request_body = CheckPhoneRequest,
    responses(
        (status = 200, description = "Whether the phone number is registered", body = ApiResponse<CheckPhoneResponse>)
    )
)]
pub async fn check_phone(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CheckPhoneRequest>,
) -> ApiResult<CheckPhoneResponse> {
    let exists = state
        .users
        .phone_taken(&request.phone_number)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(CheckPhoneResponse { exists })))
}

#[utoipa::path(
    get,
    path = "/api/v1/user/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<UserDto> {
    let user = state
        .users
        .get(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/user/update/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Phone number belongs to another user"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<UserDto> {
    let user = state
        .users
        .update(id, request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/user/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state
        .users
        .delete(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
