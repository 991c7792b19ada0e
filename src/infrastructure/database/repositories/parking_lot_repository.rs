//! SeaORM implementation of ParkingLotRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::parking_lot::{ParkingLot, ParkingLotFilter, ParkingLotRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::parking_lot;
use crate::infrastructure::database::{timed, QueryTimeouts};
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

use super::{apply_sort, fetch_page};

pub struct SeaOrmParkingLotRepository {
    db: DatabaseConnection,
    timeouts: QueryTimeouts,
}

impl SeaOrmParkingLotRepository {
    pub fn new(db: DatabaseConnection, timeouts: QueryTimeouts) -> Self {
        Self { db, timeouts }
    }

    async fn find_live(&self, id: Uuid) -> DomainResult<Option<parking_lot::Model>> {
        timed(
            self.timeouts.general,
            parking_lot::Entity::find_by_id(id)
                .filter(parking_lot::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn model_to_domain(m: parking_lot::Model) -> ParkingLot {
    ParkingLot {
        id: m.id,
        name: m.name,
        description: m.description,
        address: m.address,
        start_time: m.start_time,
        end_time: m.end_time,
        lat: m.lat,
        long: m.long,
        company_id: m.company_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

// ── ParkingLotRepository impl ──────────────────────────────────

#[async_trait]
impl ParkingLotRepository for SeaOrmParkingLotRepository {
    async fn create(&self, lot: &ParkingLot) -> DomainResult<()> {
        debug!("Saving parking lot: {} ({})", lot.id, lot.name);

        let model = parking_lot::ActiveModel {
            id: Set(lot.id),
            name: Set(lot.name.clone()),
            description: Set(lot.description.clone()),
            address: Set(lot.address.clone()),
            start_time: Set(lot.start_time),
            end_time: Set(lot.end_time),
            lat: Set(lot.lat),
            long: Set(lot.long),
            company_id: Set(lot.company_id),
            created_at: Set(lot.created_at),
            updated_at: Set(lot.updated_at),
            deleted_at: Set(None),
        };
        timed(self.timeouts.general, model.insert(&self.db)).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ParkingLot>> {
        Ok(self.find_live(id).await?.map(model_to_domain))
    }

    async fn list(
        &self,
        filter: &ParkingLotFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<ParkingLot>> {
        let mut query =
            parking_lot::Entity::find().filter(parking_lot::Column::DeletedAt.is_null());

        if let Some(ref name) = filter.name {
            query = query.filter(parking_lot::Column::Name.starts_with(name));
        }
        if let Some(company) = filter.company_id {
            query = query.filter(parking_lot::Column::CompanyId.eq(company));
        }

        let query = apply_sort(query, sort)?;
        let (models, total) =
            timed(self.timeouts.general, fetch_page(&self.db, query, page)).await?;

        let items = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page))
    }

    async fn update(&self, lot: &ParkingLot) -> DomainResult<()> {
        debug!("Updating parking lot: {}", lot.id);

        let Some(existing) = self.find_live(lot.id).await? else {
            return Err(DomainError::not_found("ParkingLot", lot.id));
        };

        let mut active: parking_lot::ActiveModel = existing.into();
        active.name = Set(lot.name.clone());
        active.description = Set(lot.description.clone());
        active.address = Set(lot.address.clone());
        active.start_time = Set(lot.start_time);
        active.end_time = Set(lot.end_time);
        active.lat = Set(lot.lat);
        active.long = Set(lot.long);
        active.company_id = Set(lot.company_id);
        active.updated_at = Set(lot.updated_at);
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let Some(existing) = self.find_live(id).await? else {
            return Err(DomainError::not_found("ParkingLot", id));
        };

        let mut active: parking_lot::ActiveModel = existing.into();
        active.deleted_at = Set(Some(Utc::now()));
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }
}
