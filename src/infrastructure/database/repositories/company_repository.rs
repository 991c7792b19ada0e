//! SeaORM implementation of CompanyRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::company::{Company, CompanyRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::company;
use crate::infrastructure::database::{timed, QueryTimeouts};

pub struct SeaOrmCompanyRepository {
    db: DatabaseConnection,
    timeouts: QueryTimeouts,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection, timeouts: QueryTimeouts) -> Self {
        Self { db, timeouts }
    }

    async fn find_live(&self, id: Uuid) -> DomainResult<Option<company::Model>> {
        timed(
            self.timeouts.general,
            company::Entity::find_by_id(id)
                .filter(company::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await
    }
}

fn model_to_domain(m: company::Model) -> Company {
    Company {
        id: m.id,
        name: m.name,
        phone_number: m.phone_number,
        email: m.email,
        password_hash: m.password_hash,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn create(&self, c: &Company) -> DomainResult<()> {
        debug!("Saving company: {} ({})", c.id, c.email);

        let model = company::ActiveModel {
            id: Set(c.id),
            name: Set(c.name.clone()),
            phone_number: Set(c.phone_number.clone()),
            email: Set(c.email.clone()),
            password_hash: Set(c.password_hash.clone()),
            created_at: Set(c.created_at),
            updated_at: Set(c.updated_at),
            deleted_at: Set(None),
        };
        timed(self.timeouts.general, model.insert(&self.db)).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Company>> {
        Ok(self.find_live(id).await?.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Company>> {
        let model = timed(
            self.timeouts.general,
            company::Entity::find()
                .filter(company::Column::Email.eq(email))
                .filter(company::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, c: &Company) -> DomainResult<()> {
        let Some(existing) = self.find_live(c.id).await? else {
            return Err(DomainError::not_found("Company", c.id));
        };

        let mut active: company::ActiveModel = existing.into();
        active.name = Set(c.name.clone());
        active.phone_number = Set(c.phone_number.clone());
        active.email = Set(c.email.clone());
        active.password_hash = Set(c.password_hash.clone());
        active.updated_at = Set(c.updated_at);
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }
}
