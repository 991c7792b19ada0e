//! SeaORM implementation of VehicleRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::vehicle::{Vehicle, VehicleFilter, VehicleRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::vehicle;
use crate::infrastructure::database::{timed, QueryTimeouts};
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

use super::{apply_sort, fetch_page};

pub struct SeaOrmVehicleRepository {
    db: DatabaseConnection,
    timeouts: QueryTimeouts,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection, timeouts: QueryTimeouts) -> Self {
        Self { db, timeouts }
    }

    async fn find_live(&self, id: Uuid) -> DomainResult<Option<vehicle::Model>> {
        timed(
            self.timeouts.general,
            vehicle::Entity::find_by_id(id)
                .filter(vehicle::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await
    }
}

pub(crate) fn model_to_domain(m: vehicle::Model) -> Vehicle {
    Vehicle {
        id: m.id,
        name: m.name,
        number: m.number,
        vehicle_type: m.vehicle_type,
        user_id: m.user_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn create(&self, v: &Vehicle) -> DomainResult<()> {
        debug!("Saving vehicle: {} ({})", v.id, v.number);

        let model = vehicle::ActiveModel {
            id: Set(v.id),
            name: Set(v.name.clone()),
            number: Set(v.number.clone()),
            vehicle_type: Set(v.vehicle_type.clone()),
            user_id: Set(v.user_id),
            created_at: Set(v.created_at),
            updated_at: Set(v.updated_at),
            deleted_at: Set(None),
        };
        timed(self.timeouts.general, model.insert(&self.db)).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Vehicle>> {
        Ok(self.find_live(id).await?.map(model_to_domain))
    }

    async fn list(
        &self,
        filter: &VehicleFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<Vehicle>> {
        let mut query = vehicle::Entity::find().filter(vehicle::Column::DeletedAt.is_null());

        if let Some(user) = filter.user_id {
            query = query.filter(vehicle::Column::UserId.eq(user));
        }
        if let Some(ref kind) = filter.vehicle_type {
            query = query.filter(vehicle::Column::VehicleType.eq(kind.as_str()));
        }

        let query = apply_sort(query, sort)?;
        let (models, total) =
            timed(self.timeouts.general, fetch_page(&self.db, query, page)).await?;

        let items = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page))
    }

    async fn update(&self, v: &Vehicle) -> DomainResult<()> {
        let Some(existing) = self.find_live(v.id).await? else {
            return Err(DomainError::not_found("Vehicle", v.id));
        };

        let mut active: vehicle::ActiveModel = existing.into();
        active.name = Set(v.name.clone());
        active.number = Set(v.number.clone());
        active.vehicle_type = Set(v.vehicle_type.clone());
        active.user_id = Set(v.user_id);
        active.updated_at = Set(v.updated_at);
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let Some(existing) = self.find_live(id).await? else {
            return Err(DomainError::not_found("Vehicle", id));
        };

        let mut active: vehicle::ActiveModel = existing.into();
        active.deleted_at = Set(Some(Utc::now()));
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }
}
