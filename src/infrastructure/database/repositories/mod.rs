//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod block_repository;
pub mod company_repository;
pub mod favorite_repository;
pub mod parking_lot_repository;
pub mod parking_slot_repository;
pub mod repository_provider;
pub mod ticket_repository;
pub mod time_frame_repository;
pub mod user_repository;
pub mod vehicle_repository;

#[cfg(test)]
pub(crate) mod fixtures;

pub use repository_provider::SeaOrmRepositoryProvider;

use std::str::FromStr;

use sea_orm::{
    ConnectionTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryOrder, QuerySelect,
    Select,
};

use crate::domain::{DomainError, DomainResult};
use crate::shared::{PageRequest, SortDirection, SortSpec};

/// Resolve `sort.column` against the entity's columns and order by it.
pub(crate) fn apply_sort<E>(query: Select<E>, sort: &SortSpec) -> DomainResult<Select<E>>
where
    E: EntityTrait,
{
    let column = E::Column::from_str(&sort.column).map_err(|_| {
        DomainError::Validation(format!("unknown sort column '{}'", sort.column))
    })?;
    Ok(match sort.direction {
        SortDirection::Asc => query.order_by_asc(column),
        SortDirection::Desc => query.order_by_desc(column),
    })
}

/// Count the full result set, then fetch one page of it.
pub(crate) async fn fetch_page<E, C>(
    db: &C,
    query: Select<E>,
    page: PageRequest,
) -> Result<(Vec<E::Model>, u64), sea_orm::DbErr>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
    C: ConnectionTrait,
{
    let total = query.clone().count(db).await?;
    let models = query
        .offset(page.offset())
        .limit(page.limit())
        .all(db)
        .await?;
    Ok((models, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::entities::block;

    #[test]
    fn known_column_is_accepted() {
        let sort = SortSpec::parse(Some("code asc")).unwrap();
        assert!(apply_sort(block::Entity::find(), &sort).is_ok());
    }

    #[test]
    fn unknown_column_is_rejected() {
        let sort = SortSpec::parse(Some("password desc")).unwrap();
        let err = apply_sort(block::Entity::find(), &sort).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
