//! Migration handler

use std::sync::Arc;

use axum::{extract::State, Json};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::infrastructure::database::db_err;
use crate::infrastructure::database::migrator::Migrator;
use crate::interfaces::http::common::{domain_error, ApiResponse, ApiResult};
use crate::shared::MessageTable;

#[derive(Clone)]
pub struct MigrationState {
    pub db: DatabaseConnection,
    pub messages: Arc<MessageTable>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MigrationReport {
    /// Names of the migrations applied by this call
    pub applied: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/internal/migrate",
    tag = "Maintenance",
    responses(
        (status = 200, description = "Pending migrations applied", body = ApiResponse<MigrationReport>),
        (status = 500, description = "Migration failed")
    )
)]
pub async fn run_migrations(State(state): State<MigrationState>) -> ApiResult<MigrationReport> {
    let pending = Migrator::get_pending_migrations(&state.db)
        .await
        .map_err(|e| domain_error(&state.messages, db_err(e)))?;
    let applied: Vec<String> = pending.iter().map(|m| m.name().to_string()).collect();

    Migrator::up(&state.db, None)
        .await
        .map_err(|e| domain_error(&state.messages, db_err(e)))?;

    info!(count = applied.len(), "Migrations applied");
    Ok(Json(ApiResponse::success(MigrationReport { applied })))
}
