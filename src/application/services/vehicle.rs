use std::sync::Arc;

use uuid::Uuid;

use crate::domain::vehicle::{NewVehicle, Vehicle, VehicleFilter, VehiclePatch};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

pub struct VehicleService {
    repos: Arc<dyn RepositoryProvider>,
}

impl VehicleService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, req: NewVehicle) -> DomainResult<Vehicle> {
        if self.repos.users().find_by_id(req.user_id).await?.is_none() {
            return Err(DomainError::not_found("User", req.user_id));
        }
        let vehicle = Vehicle::new(req);
        self.repos.vehicles().create(&vehicle).await?;
        Ok(vehicle)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Vehicle> {
        self.repos
            .vehicles()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Vehicle", id))
    }

    pub async fn list(
        &self,
        filter: &VehicleFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<Vehicle>> {
        self.repos.vehicles().list(filter, page, sort).await
    }

    pub async fn update(&self, id: Uuid, patch: VehiclePatch) -> DomainResult<Vehicle> {
        let mut vehicle = self.get(id).await?;
        vehicle.apply_patch(patch);
        self.repos.vehicles().update(&vehicle).await?;
        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.repos.vehicles().delete(id).await
    }
}
