//! Ticket handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{
    CancelResultDto, CancelTicketsRequest, CreateTicketRequest, ExtendTicketRequest, ExtensionDto,
    MerchantTicketQuery, ProcedureRequest, TicketDetailDto, TicketDto, TicketWithExtendDto,
    UserTicketQuery,
};
use crate::application::{CreateTicket, TicketService};
use crate::domain::ticket::MerchantTicketFilter;
use crate::interfaces::http::common::{
    domain_error, ActingUser, ApiError, ApiResponse, ApiResult, ListParams, PaginatedResponse,
    ValidatedJson,
};
use crate::shared::MessageTable;

#[derive(Clone)]
pub struct TicketHandlerState {
    pub service: Arc<TicketService>,
    pub messages: Arc<MessageTable>,
}

#[utoipa::path(
    post,
    path = "/api/v1/ticket/create",
    tag = "Tickets",
    request_body = CreateTicketRequest,
    responses(
        (status = 201, description = "Ticket booked", body = ApiResponse<TicketDto>),
        (status = 400, description = "Invalid interval, long-term type, or slot outside the lot"),
        (status = 404, description = "User, vehicle, parking lot, slot or time frame not found")
    )
)]
pub async fn create_ticket(
    State(state): State<TicketHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateTicketRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TicketDto>>), ApiError> {
    let request = CreateTicket::try_from(request).map_err(|e| domain_error(&state.messages, e))?;
    let ticket = state
        .service
        .create(request)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(ticket.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/ticket/get-all",
    tag = "Tickets",
    params(
        ("x-user-id" = String, Header, description = "Acting user id"),
        UserTicketQuery
    ),
    responses(
        (status = 200, description = "Tickets of the acting user", body = ApiResponse<Vec<TicketDetailDto>>),
        (status = 400, description = "Unknown state"),
        (status = 401, description = "Missing x-user-id")
    )
)]
pub async fn list_user_tickets(
    State(state): State<TicketHandlerState>,
    ActingUser(user_id): ActingUser,
    Query(query): Query<UserTicketQuery>,
) -> ApiResult<Vec<TicketDetailDto>> {
    let ticket_state = query.state().map_err(|e| domain_error(&state.messages, e))?;
    let tickets = state
        .service
        .list_for_user(user_id, ticket_state)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(
        tickets.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/ticket/get-one-with-extend/{id}",
    tag = "Tickets",
    params(("id" = Uuid, Path, description = "Origin ticket ID")),
    responses(
        (status = 200, description = "Ticket with its extensions", body = ApiResponse<TicketWithExtendDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_ticket_with_extensions(
    State(state): State<TicketHandlerState>,
    Path(id): Path<Uuid>,
) -> ApiResult<TicketWithExtendDto> {
    let ticket = state
        .service
        .get_with_extensions(id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(ticket.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/ticket/cancel",
    tag = "Tickets",
    request_body = CancelTicketsRequest,
    responses(
        (status = 200, description = "Per-ticket outcome", body = ApiResponse<Vec<CancelResultDto>>),
        (status = 400, description = "A ticket is already completed"),
        (status = 404, description = "Unknown ticket id")
    )
)]
pub async fn cancel_tickets(
    State(state): State<TicketHandlerState>,
    ValidatedJson(request): ValidatedJson<CancelTicketsRequest>,
) -> ApiResult<Vec<CancelResultDto>> {
    let outcomes = state
        .service
        .cancel(&request.list_ticket_id)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    let results = request
        .list_ticket_id
        .iter()
        .zip(outcomes)
        .map(|(&id, outcome)| CancelResultDto::new(id, outcome))
        .collect();
    Ok(Json(ApiResponse::success(results)))
}

#[utoipa::path(
    post,
    path = "/api/v1/ticket/extend",
    tag = "Tickets",
    request_body = ExtendTicketRequest,
    responses(
        (status = 201, description = "Extension ticket and link", body = ApiResponse<ExtensionDto>),
        (status = 400, description = "Invalid interval"),
        (status = 404, description = "Origin ticket or time frame not found")
    )
)]
pub async fn extend_ticket(
    State(state): State<TicketHandlerState>,
    ValidatedJson(request): ValidatedJson<ExtendTicketRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ExtensionDto>>), ApiError> {
    let extension = state
        .service
        .extend(request.into())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(extension.into()))))
}

#[utoipa::path(
    post,
    path = "/api/v1/ticket/procedure",
    tag = "Tickets",
    request_body = ProcedureRequest,
    responses(
        (status = 200, description = "Checked in or out", body = ApiResponse<TicketDto>),
        (status = 400, description = "Unknown type or wrong state"),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn ticket_procedure(
    State(state): State<TicketHandlerState>,
    ValidatedJson(request): ValidatedJson<ProcedureRequest>,
) -> ApiResult<TicketDto> {
    let action = request.action().map_err(|e| domain_error(&state.messages, e))?;
    let ticket = state
        .service
        .procedure(request.ticket_id, action)
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(ApiResponse::success(ticket.into())))
}

#[utoipa::path(
    get,
    path = "/api/merchant/ticket/get-all",
    tag = "Merchant",
    params(MerchantTicketQuery, ListParams),
    responses(
        (status = 200, description = "Ticket page", body = PaginatedResponse<TicketDto>),
        (status = 400, description = "Missing lot/company or unknown state")
    )
)]
pub async fn list_merchant_tickets(
    State(state): State<TicketHandlerState>,
    Query(query): Query<MerchantTicketQuery>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedResponse<TicketDto>>, ApiError> {
    let filter =
        MerchantTicketFilter::try_from(query).map_err(|e| domain_error(&state.messages, e))?;
    let page = state
        .service
        .list_for_merchant(&filter, params.page())
        .await
        .map_err(|e| domain_error(&state.messages, e))?;
    Ok(Json(PaginatedResponse::from_result(page)))
}
