use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::user::{RefreshToken, RefreshTokenRepository, User, UserRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{refresh_token, user};
use crate::infrastructure::database::{timed, QueryTimeouts};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
    timeouts: QueryTimeouts,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection, timeouts: QueryTimeouts) -> Self {
        Self { db, timeouts }
    }

    async fn find_live(&self, id: Uuid) -> DomainResult<Option<user::Model>> {
        timed(
            self.timeouts.general,
            user::Entity::find_by_id(id)
                .filter(user::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await
    }
}

pub struct SeaOrmRefreshTokenRepository {
    db: DatabaseConnection,
    timeouts: QueryTimeouts,
}

impl SeaOrmRefreshTokenRepository {
    pub fn new(db: DatabaseConnection, timeouts: QueryTimeouts) -> Self {
        Self { db, timeouts }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        display_name: model.display_name,
        phone_number: model.phone_number,
        email: model.email,
        image_url: model.image_url,
        social_id: model.social_id,
        password_hash: model.password_hash,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn token_model_to_domain(model: refresh_token::Model) -> RefreshToken {
    RefreshToken {
        id: model.id,
        user_id: model.user_id,
        token_hash: model.token_hash,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

// ── Repository implementations ──────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, u: &User) -> DomainResult<()> {
        debug!("Saving user: {} ({})", u.id, u.phone_number);

        let model = user::ActiveModel {
            id: Set(u.id),
            display_name: Set(u.display_name.clone()),
            phone_number: Set(u.phone_number.clone()),
            email: Set(u.email.clone()),
            image_url: Set(u.image_url.clone()),
            social_id: Set(u.social_id.clone()),
            password_hash: Set(u.password_hash.clone()),
            created_at: Set(u.created_at),
            updated_at: Set(u.updated_at),
            deleted_at: Set(None),
        };
        timed(self.timeouts.general, model.insert(&self.db)).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        Ok(self.find_live(id).await?.map(user_model_to_domain))
    }

    async fn find_by_phone(&self, phone_number: &str) -> DomainResult<Option<User>> {
        let model = timed(
            self.timeouts.general,
            user::Entity::find()
                .filter(user::Column::PhoneNumber.eq(phone_number))
                .filter(user::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn update(&self, u: &User) -> DomainResult<()> {
        let Some(existing) = self.find_live(u.id).await? else {
            return Err(DomainError::not_found("User", u.id));
        };

        let mut active: user::ActiveModel = existing.into();
        active.display_name = Set(u.display_name.clone());
        active.phone_number = Set(u.phone_number.clone());
        active.email = Set(u.email.clone());
        active.image_url = Set(u.image_url.clone());
        active.social_id = Set(u.social_id.clone());
        active.password_hash = Set(u.password_hash.clone());
        active.updated_at = Set(u.updated_at);
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let Some(existing) = self.find_live(id).await? else {
            return Err(DomainError::not_found("User", id));
        };

        let mut active: user::ActiveModel = existing.into();
        active.deleted_at = Set(Some(Utc::now()));
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenRepository for SeaOrmRefreshTokenRepository {
    async fn save(&self, token: &RefreshToken) -> DomainResult<()> {
        let model = refresh_token::ActiveModel {
            id: Set(token.id),
            user_id: Set(token.user_id),
            token_hash: Set(token.token_hash.clone()),
            expires_at: Set(token.expires_at),
            created_at: Set(token.created_at),
            deleted_at: Set(None),
        };
        timed(self.timeouts.general, model.insert(&self.db)).await?;
        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &str) -> DomainResult<Option<RefreshToken>> {
        let model = timed(
            self.timeouts.general,
            refresh_token::Entity::find()
                .filter(refresh_token::Column::TokenHash.eq(token_hash))
                .filter(refresh_token::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await?;
        Ok(model.map(token_model_to_domain))
    }
}
