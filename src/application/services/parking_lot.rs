//! Parking lot use cases

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::parking_lot::{NewParkingLot, ParkingLot, ParkingLotFilter, ParkingLotPatch};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

pub struct ParkingLotService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ParkingLotService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, req: NewParkingLot) -> DomainResult<ParkingLot> {
        if self.repos.companies().find_by_id(req.company_id).await?.is_none() {
            return Err(DomainError::not_found("Company", req.company_id));
        }
        let lot = ParkingLot::new(req);
        self.repos.parking_lots().create(&lot).await?;
        info!(lot_id = %lot.id, name = %lot.name, "Parking lot created");
        Ok(lot)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<ParkingLot> {
        self.repos
            .parking_lots()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("ParkingLot", id))
    }

    pub async fn list(
        &self,
        filter: &ParkingLotFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<ParkingLot>> {
        self.repos.parking_lots().list(filter, page, sort).await
    }

    pub async fn update(&self, id: Uuid, patch: ParkingLotPatch) -> DomainResult<ParkingLot> {
        let mut lot = self.get(id).await?;
        lot.apply_patch(patch);
        self.repos.parking_lots().update(&lot).await?;
        Ok(lot)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.repos.parking_lots().delete(id).await?;
        info!(lot_id = %id, "Parking lot deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{seed_company, test_repos};

    fn request(company_id: Uuid) -> NewParkingLot {
        NewParkingLot {
            name: "Central".into(),
            description: "old".into(),
            address: "1 Main St".into(),
            start_time: None,
            end_time: None,
            lat: 10.77,
            long: 106.70,
            company_id,
        }
    }

    #[tokio::test]
    async fn empty_description_patch_is_persisted() {
        let repos = test_repos().await;
        let company = seed_company(&repos).await;
        let service = ParkingLotService::new(repos);

        let lot = service.create(request(company)).await.unwrap();
        service
            .update(
                lot.id,
                ParkingLotPatch {
                    description: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(service.get(lot.id).await.unwrap().description, "");

        service
            .update(
                lot.id,
                ParkingLotPatch {
                    name: Some("North".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let stored = service.get(lot.id).await.unwrap();
        assert_eq!(stored.name, "North");
        assert_eq!(stored.description, "");
    }

    #[tokio::test]
    async fn deleted_lot_is_not_found() {
        let repos = test_repos().await;
        let company = seed_company(&repos).await;
        let service = ParkingLotService::new(repos);

        let lot = service.create(request(company)).await.unwrap();
        service.delete(lot.id).await.unwrap();
        assert!(matches!(
            service.get(lot.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn unknown_company_is_rejected() {
        let repos = test_repos().await;
        let service = ParkingLotService::new(repos);
        assert!(matches!(
            service.create(request(Uuid::new_v4())).await,
            Err(DomainError::NotFound { entity: "Company", .. })
        ));
    }
}
