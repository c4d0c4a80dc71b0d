//! Base repository traits shared by the SeaORM stores.
//!
//! Stores implement `db()` and get the generic read/insert operations
//! for free.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, Iterable, PrimaryKeyToColumn, QueryOrder,
};

use crate::errors::AppResult;

/// Read operations (Query)
#[async_trait]
pub trait ReadRepository<E, M>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Every row of the table, ordered by primary key
    async fn find_all(&self) -> AppResult<Vec<M>> {
        let query = E::PrimaryKey::iter()
            .fold(E::find(), |query, key| query.order_by_asc(key.into_column()));

        query.all(self.db()).await.map_err(Into::into)
    }
}

/// Write operations (Command)
#[async_trait]
pub trait WriteRepository<E, M, A>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Insert a new row and return it as stored
    async fn insert(&self, model: A) -> AppResult<M>
    where
        <<A as ActiveModelTrait>::Entity as EntityTrait>::Model: Send,
    {
        model.insert(self.db()).await.map_err(Into::into)
    }
}
