//! API Router with Swagger UI

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{
    AuthService, AuthSettings, BlockService, CompanyService, FavoriteService, ParkingLotService,
    ParkingSlotService, TicketService, TimeFrameService, UserService, VehicleService,
};
use crate::domain::RepositoryProvider;
use crate::shared::MessageTable;

use super::common::{error_response, ApiError, EmptyData};
use super::modules::request_id::request_id_middleware;
use super::modules::{
    blocks, companies, favorites, health, migration, parking_lots, parking_slots, tickets,
    time_frames, users, vehicles,
};

/// Everything the route table needs. Handlers extract their own slice of it
/// through `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub messages: Arc<MessageTable>,
    pub started_at: Arc<Instant>,
    pub parking_lots: Arc<ParkingLotService>,
    pub blocks: Arc<BlockService>,
    pub parking_slots: Arc<ParkingSlotService>,
    pub time_frames: Arc<TimeFrameService>,
    pub vehicles: Arc<VehicleService>,
    pub favorites: Arc<FavoriteService>,
    pub tickets: Arc<TicketService>,
    pub users: Arc<UserService>,
    pub auth: Arc<AuthService>,
    pub companies: Arc<CompanyService>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        repos: Arc<dyn RepositoryProvider>,
        settings: AuthSettings,
        messages: Arc<MessageTable>,
    ) -> Self {
        Self {
            db,
            messages,
            started_at: Arc::new(Instant::now()),
            parking_lots: Arc::new(ParkingLotService::new(repos.clone())),
            blocks: Arc::new(BlockService::new(repos.clone())),
            parking_slots: Arc::new(ParkingSlotService::new(repos.clone())),
            time_frames: Arc::new(TimeFrameService::new(repos.clone())),
            vehicles: Arc::new(VehicleService::new(repos.clone())),
            favorites: Arc::new(FavoriteService::new(repos.clone())),
            tickets: Arc::new(TicketService::new(repos.clone())),
            users: Arc::new(UserService::new(repos.clone(), settings.clone())),
            auth: Arc::new(AuthService::new(repos.clone(), settings.clone())),
            companies: Arc::new(CompanyService::new(repos, settings)),
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AppState> for Arc<MessageTable> {
    fn from_ref(s: &AppState) -> Self {
        Arc::clone(&s.messages)
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        health::HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for migration::MigrationState {
    fn from_ref(s: &AppState) -> Self {
        migration::MigrationState {
            db: s.db.clone(),
            messages: Arc::clone(&s.messages),
        }
    }
}

impl FromRef<AppState> for users::UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        users::UserHandlerState {
            users: Arc::clone(&s.users),
            auth: Arc::clone(&s.auth),
            messages: Arc::clone(&s.messages),
        }
    }
}

/// Handler states that pair one service with the message table
macro_rules! service_state {
    ($($state:ty => $field:ident),* $(,)?) => {
        $(
            impl FromRef<AppState> for $state {
                fn from_ref(s: &AppState) -> Self {
                    Self {
                        service: Arc::clone(&s.$field),
                        messages: Arc::clone(&s.messages),
                    }
                }
            }
        )*
    };
}

service_state! {
    parking_lots::ParkingLotHandlerState => parking_lots,
    blocks::BlockHandlerState => blocks,
    parking_slots::ParkingSlotHandlerState => parking_slots,
    time_frames::TimeFrameHandlerState => time_frames,
    vehicles::VehicleHandlerState => vehicles,
    favorites::FavoriteHandlerState => favorites,
    tickets::TicketHandlerState => tickets,
    companies::CompanyHandlerState => companies,
}

/// Security schemes for OpenAPI. Authentication itself happens in the
/// gateway, which forwards the caller in `x-user-id`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/v1/user/login"))
                        .build(),
                ),
            );
            components.add_security_scheme(
                "user_id",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-user-id"))),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        migration::run_migrations,
        // Parking lots
        parking_lots::create_parking_lot,
        parking_lots::get_parking_lot,
        parking_lots::list_parking_lots,
        parking_lots::list_company_parking_lots,
        parking_lots::update_parking_lot,
        parking_lots::delete_parking_lot,
        // Blocks
        blocks::create_block,
        blocks::get_block,
        blocks::list_blocks,
        blocks::update_block,
        blocks::delete_block,
        // Parking slots
        parking_slots::create_parking_slot,
        parking_slots::get_parking_slot,
        parking_slots::list_parking_slots,
        parking_slots::available_parking_slots,
        parking_slots::update_parking_slot,
        parking_slots::delete_parking_slot,
        // Time frames
        time_frames::list_time_frames,
        time_frames::create_time_frames,
        time_frames::replace_time_frames,
        time_frames::create_time_frame,
        time_frames::get_time_frame,
        time_frames::update_time_frame,
        time_frames::delete_time_frame,
        // Vehicles
        vehicles::create_vehicle,
        vehicles::get_vehicle,
        vehicles::list_vehicles,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        // Favorites
        favorites::create_favorite,
        favorites::list_favorites,
        favorites::delete_favorite,
        // Tickets
        tickets::create_ticket,
        tickets::list_user_tickets,
        tickets::get_ticket_with_extensions,
        tickets::cancel_tickets,
        tickets::extend_ticket,
        tickets::ticket_procedure,
        tickets::list_merchant_tickets,
        // Users
        users::login,
        users::refresh_token,
        users::reset_password,
        users::create_user,
        users::check_phone,
        users::get_user,
        users::update_user,
        users::delete_user,
        // Merchant
        companies::create_company,
        companies::company_login,
        companies::get_company,
        companies::update_company,
        companies::update_company_password,
    ),
    components(
        schemas(
            EmptyData,
            health::HealthResponse,
            health::DatabaseHealth,
            health::HealthStatus,
            migration::MigrationReport,
            parking_lots::ParkingLotDto,
            parking_lots::CreateParkingLotRequest,
            parking_lots::UpdateParkingLotRequest,
            blocks::BlockDto,
            blocks::CreateBlockRequest,
            blocks::UpdateBlockRequest,
            parking_slots::ParkingSlotDto,
            parking_slots::AvailableBlockDto,
            parking_slots::CreateParkingSlotRequest,
            parking_slots::UpdateParkingSlotRequest,
            time_frames::TimeFrameDto,
            time_frames::CreateTimeFrameRequest,
            time_frames::TimeFrameBatchRequest,
            time_frames::UpdateTimeFrameRequest,
            vehicles::VehicleDto,
            vehicles::CreateVehicleRequest,
            vehicles::UpdateVehicleRequest,
            favorites::FavoriteDto,
            favorites::CreateFavoriteRequest,
            tickets::TicketDto,
            tickets::TicketDetailDto,
            tickets::TicketWithExtendDto,
            tickets::TicketExtendDto,
            tickets::ExtensionDto,
            tickets::CreateTicketRequest,
            tickets::CancelTicketsRequest,
            tickets::CancelResultDto,
            tickets::ExtendTicketRequest,
            tickets::ProcedureRequest,
            users::UserDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            users::LoginRequest,
            users::LoginResponse,
            users::RefreshRequest,
            users::TokenResponse,
            users::ResetPasswordRequest,
            users::CheckPhoneRequest,
            users::CheckPhoneResponse,
            companies::CompanyDto,
            companies::CreateCompanyRequest,
            companies::UpdateCompanyRequest,
            companies::CompanyLoginRequest,
            companies::CompanyLoginResponse,
            companies::UpdatePasswordRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and database health"),
        (name = "Maintenance", description = "Schema migrations"),
        (name = "Parking Lots", description = "Parking lot management"),
        (name = "Blocks", description = "Blocks (zones) inside a parking lot"),
        (name = "Parking Slots", description = "Slots and availability search"),
        (name = "Time Frames", description = "Pricing time frames of a parking lot"),
        (name = "Vehicles", description = "Vehicles registered by users"),
        (name = "Favorites", description = "Parking lots saved by the acting user"),
        (name = "Tickets", description = "Booking, extension, cancellation, check-in and check-out"),
        (name = "Users", description = "User accounts and authentication"),
        (name = "Merchant", description = "Company accounts and merchant views"),
    ),
    info(
        title = "Parkar API",
        version = "1.0.0",
        description = "REST API for parking lot reservations",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

async fn route_not_found(State(messages): State<Arc<MessageTable>>) -> ApiError {
    error_response(&messages, StatusCode::NOT_FOUND, "route not found")
}

fn parking_lot_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(parking_lots::create_parking_lot))
        .route("/get-one/{id}", get(parking_lots::get_parking_lot))
        .route("/get-list", get(parking_lots::list_parking_lots))
        .route("/update/{id}", put(parking_lots::update_parking_lot))
        .route("/delete/{id}", delete(parking_lots::delete_parking_lot))
}

fn block_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(blocks::create_block))
        .route("/get-one/{id}", get(blocks::get_block))
        .route("/get-list", get(blocks::list_blocks))
        .route("/update/{id}", put(blocks::update_block))
        .route("/delete/{id}", delete(blocks::delete_block))
}

fn parking_slot_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(parking_slots::create_parking_slot))
        .route("/get-one/{id}", get(parking_slots::get_parking_slot))
        .route("/get-list", get(parking_slots::list_parking_slots))
        .route("/available", get(parking_slots::available_parking_slots))
        .route("/update/{id}", put(parking_slots::update_parking_slot))
        .route(
            "/delete/{id}",
            delete(parking_slots::delete_parking_slot),
        )
}

fn time_frame_routes() -> Router<AppState> {
    Router::new()
        .route("/get-all", get(time_frames::list_time_frames))
        .route("/create-multi", post(time_frames::create_time_frames))
        .route("/update", put(time_frames::replace_time_frames))
        .route("/create", post(time_frames::create_time_frame))
        .route("/get-one/{id}", get(time_frames::get_time_frame))
        .route("/update/{id}", put(time_frames::update_time_frame))
        .route("/delete/{id}", delete(time_frames::delete_time_frame))
}

fn vehicle_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(vehicles::create_vehicle))
        .route("/get-one/{id}", get(vehicles::get_vehicle))
        .route("/get-list", get(vehicles::list_vehicles))
        .route("/update/{id}", put(vehicles::update_vehicle))
        .route("/delete/{id}", delete(vehicles::delete_vehicle))
}

fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(favorites::create_favorite))
        .route("/get-all", get(favorites::list_favorites))
        .route(
            "/delete/{parking_lot_id}",
            delete(favorites::delete_favorite),
        )
}

fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(tickets::create_ticket))
        .route("/get-all", get(tickets::list_user_tickets))
        .route(
            "/get-one-with-extend/{id}",
            get(tickets::get_ticket_with_extensions),
        )
        .route("/cancel", put(tickets::cancel_tickets))
        .route("/extend", post(tickets::extend_ticket))
        .route("/procedure", post(tickets::ticket_procedure))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(users::login))
        .route("/refresh", post(users::refresh_token))
        .route("/reset-password", post(users::reset_password))
        .route("/create", post(users::create_user))
        .route("/check-phone", post(users::check_phone))
        .route("/update/{id}", put(users::update_user))
        .route("/{id}", get(users::get_user).delete(users::delete_user))
}

/// Merchant dashboard: company accounts plus read views shared with the
/// consumer API
fn merchant_routes() -> Router<AppState> {
    let company = Router::new()
        .route("/create", post(companies::create_company))
        .route("/login", post(companies::company_login))
        .route("/get-one/{id}", get(companies::get_company))
        .route("/update/{id}", put(companies::update_company))
        .route(
            "/update-password/{id}",
            put(companies::update_company_password),
        );

    Router::new()
        .nest("/company", company)
        .route(
            "/parking-lot/get-list",
            get(parking_lots::list_company_parking_lots),
        )
        .route("/parking-lot/get-one/{id}", get(parking_lots::get_parking_lot))
        .route("/block/get-list", get(blocks::list_blocks))
        .route("/time-frame/get-list", get(time_frames::list_time_frames))
        .route("/ticket/get-all", get(tickets::list_merchant_tickets))
}

fn panic_response(
    messages: Arc<MessageTable>,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone {
    move |payload: Box<dyn Any + Send + 'static>| {
        let detail = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        tracing::error!(panic = %detail, "Handler panicked");
        error_response(
            &messages,
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error",
        )
        .into_response()
    }
}

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let v1 = Router::new()
        .nest("/parking-lot", parking_lot_routes())
        .nest("/block", block_routes())
        .nest("/parking-slot", parking_slot_routes())
        .nest("/time-frame", time_frame_routes())
        .nest("/vehicle", vehicle_routes())
        .nest("/favorite", favorite_routes())
        .nest("/ticket", ticket_routes())
        .nest("/user", user_routes());

    let messages = Arc::clone(&state.messages);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/internal/migrate", post(migration::run_migrations))
        .nest("/api/v1", v1)
        .nest("/api/merchant", merchant_routes())
        .fallback(route_not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response(messages)))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::Service;
    use uuid::Uuid;

    use crate::application::services::test_support::{
        seed_lot_with_slot, seed_user, test_settings, LotFixture,
    };
    use crate::infrastructure::database::{test_db, QueryTimeouts};
    use crate::infrastructure::SeaOrmRepositoryProvider;
    use crate::interfaces::http::common::{ListParams, USER_ID_HEADER};

    struct TestApp {
        router: Router,
        repos: Arc<dyn RepositoryProvider>,
    }

    impl TestApp {
        async fn new() -> Self {
            let db = test_db().await;
            let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(
                db.clone(),
                QueryTimeouts::default(),
            ));
            let state = AppState::new(
                db,
                repos.clone(),
                test_settings(),
                Arc::new(MessageTable::default()),
            );
            Self {
                router: create_api_router(state),
                repos,
            }
        }

        async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
            let resp = self.router.clone().into_service().call(req).await.unwrap();
            let status = resp.status();
            let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
                .await
                .unwrap();
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, body)
        }

        async fn get(&self, uri: &str) -> (StatusCode, Value) {
            self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
        }

        async fn json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
            self.send(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
        }

        /// User, vehicle and time frame needed to book on `fx`
        async fn booking_refs(&self, fx: &LotFixture) -> (Uuid, Uuid, Uuid) {
            let user_id = seed_user(&self.repos, "0900000001").await;
            let (status, vehicle) = self
                .json(
                    "POST",
                    "/api/v1/vehicle/create",
                    json!({"name": "Car", "number": "51A-12345", "vehicle_type": "car", "user_id": user_id}),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED);
            let (status, frame) = self
                .json(
                    "POST",
                    "/api/v1/time-frame/create",
                    json!({"duration": 60, "cost": 20000.0, "parking_lot_id": fx.lot_id}),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED);
            (
                user_id,
                id_of(&vehicle["data"]),
                id_of(&frame["data"]),
            )
        }
    }

    fn id_of(value: &Value) -> Uuid {
        value["id"].as_str().unwrap().parse().unwrap()
    }

    fn available_slots(body: &Value) -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|block| block["parking_slots"].as_array().unwrap().iter())
            .map(|slot| slot["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn health_reports_database() {
        let app = TestApp::new().await;
        let (status, body) = app.get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_uses_error_envelope() {
        let app = TestApp::new().await;
        let (status, body) = app.get("/api/v1/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Record not found, please check your input");
    }

    #[tokio::test]
    async fn missing_record_is_404() {
        let app = TestApp::new().await;
        let uri = format!("/api/v1/block/get-one/{}", Uuid::new_v4());
        let (status, body) = app.get(&uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("Block"));
    }

    #[tokio::test]
    async fn favorites_require_acting_user() {
        let app = TestApp::new().await;
        let (status, _) = app.get("/api/v1/favorite/get-all").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let fx = seed_lot_with_slot(&app.repos).await;
        let user = Uuid::new_v4().to_string();
        let req = |method: &str, uri: &str, body: Body| {
            Request::builder()
                .method(method)
                .uri(uri)
                .header(USER_ID_HEADER, format!("{}|mobile", user))
                .header("content-type", "application/json")
                .body(body)
                .unwrap()
        };

        let create = json!({"parking_lot_id": fx.lot_id}).to_string();
        let (status, _) = app
            .send(req("POST", "/api/v1/favorite/create", Body::from(create)))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = app
            .send(req("GET", "/api/v1/favorite/get-all", Body::empty()))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["parking_lot"]["name"], "Central");
    }

    #[tokio::test]
    async fn booking_blocks_slot_until_cancelled() {
        let app = TestApp::new().await;
        let fx = seed_lot_with_slot(&app.repos).await;
        let (user_id, vehicle_id, frame_id) = app.booking_refs(&fx).await;

        let (status, ticket) = app
            .json(
                "POST",
                "/api/v1/ticket/create",
                json!({
                    "user_id": user_id,
                    "vehicle_id": vehicle_id,
                    "parking_lot_id": fx.lot_id,
                    "parking_slot_id": fx.slot_id,
                    "time_frame_id": frame_id,
                    "start_time": "2026-03-01T09:00:00Z",
                    "end_time": "2026-03-01T10:00:00Z",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(ticket["data"]["state"], "new");
        let ticket_id = id_of(&ticket["data"]);

        let window = format!(
            "/api/v1/parking-slot/available?parking_lot_id={}&start=2026-03-01T09:30:00Z&end=2026-03-01T09:45:00Z",
            fx.lot_id
        );
        let (status, body) = app.get(&window).await;
        assert_eq!(status, StatusCode::OK);
        assert!(available_slots(&body).is_empty());

        let (status, body) = app
            .json(
                "PUT",
                "/api/v1/ticket/cancel",
                json!({"list_ticket_id": [ticket_id]}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["already_cancelled"], false);

        let (_, body) = app.get(&window).await;
        assert_eq!(available_slots(&body), vec!["A1".to_string()]);
    }

    #[tokio::test]
    async fn user_ticket_listing_filters_by_state() {
        let app = TestApp::new().await;
        let fx = seed_lot_with_slot(&app.repos).await;
        let (user_id, vehicle_id, frame_id) = app.booking_refs(&fx).await;

        let (status, _) = app
            .json(
                "POST",
                "/api/v1/ticket/create",
                json!({
                    "user_id": user_id,
                    "vehicle_id": vehicle_id,
                    "parking_lot_id": fx.lot_id,
                    "parking_slot_id": fx.slot_id,
                    "time_frame_id": frame_id,
                    "start_time": "2026-03-01T09:00:00Z",
                    "end_time": "2026-03-01T10:00:00Z",
                    "is_long_term": true,
                    "type": "daily",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let list = |state: &str| {
            Request::builder()
                .uri(format!("/api/v1/ticket/get-all?state={}", state))
                .header(USER_ID_HEADER, user_id.to_string())
                .body(Body::empty())
                .unwrap()
        };

        let (status, body) = app.send(list("new")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["parking_slot"]["name"], "A1");
        assert!(!body["data"][0]["long_term_ticket_id"].is_null());

        let (_, body) = app.send(list("completed")).await;
        assert!(body["data"].as_array().unwrap().is_empty());

        let (status, _) = app.send(list("parked")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn merchant_lists_time_frames_of_lot() {
        let app = TestApp::new().await;
        let fx = seed_lot_with_slot(&app.repos).await;
        let (_, _, frame_id) = app.booking_refs(&fx).await;

        let uri = format!("/api/merchant/time-frame/get-list?parking_lot_id={}", fx.lot_id);
        let (status, body) = app.get(&uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(id_of(&body["data"][0]), frame_id);

        let uri = format!("/api/merchant/time-frame/get-all?parking_lot_id={}", fx.lot_id);
        let (status, _) = app.get(&uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn booking_slot_of_another_lot_is_400() {
        let app = TestApp::new().await;
        let fx = seed_lot_with_slot(&app.repos).await;
        let other = seed_lot_with_slot(&app.repos).await;
        let (user_id, vehicle_id, frame_id) = app.booking_refs(&fx).await;

        let (status, body) = app
            .json(
                "POST",
                "/api/v1/ticket/create",
                json!({
                    "user_id": user_id,
                    "vehicle_id": vehicle_id,
                    "parking_lot_id": other.lot_id,
                    "parking_slot_id": fx.slot_id,
                    "time_frame_id": frame_id,
                    "start_time": "2026-03-01T09:00:00Z",
                    "end_time": "2026-03-01T10:00:00Z",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn huge_page_number_yields_empty_page() {
        let app = TestApp::new().await;
        seed_lot_with_slot(&app.repos).await;

        let (status, body) = app
            .get("/api/v1/block/get-list?page=18446744073709551615")
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn user_login_and_refresh() {
        let app = TestApp::new().await;
        let (status, _) = app
            .json(
                "POST",
                "/api/v1/user/create",
                json!({"display_name": "Lan", "phone_number": "0912345678", "password": "secret1"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = app
            .json(
                "POST",
                "/api/v1/user/check-phone",
                json!({"phone_number": "0912345678"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["exists"], true);

        let (status, _) = app
            .json(
                "POST",
                "/api/v1/user/login",
                json!({"phone_number": "0912345678", "password": "wrong-one"}),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, login) = app
            .json(
                "POST",
                "/api/v1/user/login",
                json!({"phone_number": "0912345678", "password": "secret1"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(login["data"]["token_type"], "Bearer");
        assert!(login["data"]["user"].get("password_hash").is_none());

        let (status, body) = app
            .json(
                "POST",
                "/api/v1/user/refresh",
                json!({"refresh_token": login["data"]["refresh_token"]}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["access_token"].as_str().is_some());
    }

    #[tokio::test]
    async fn invalid_body_is_400() {
        let app = TestApp::new().await;
        let (status, body) = app
            .json("POST", "/api/v1/block/create", json!({"code": ""}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = TestApp::new().await;
        let (status, body) = app.get("/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]
            .as_object()
            .unwrap()
            .contains_key("/api/v1/parking-slot/available"));
    }

    #[test]
    fn list_params_default_to_first_page() {
        let page = ListParams::default().page();
        assert_eq!((page.page, page.page_size), (1, 30));
    }
}
