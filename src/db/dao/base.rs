use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, Select,
};

use super::error::{DaoLayerError, DaoResult};

pub type ModelOf<D> = <<D as DaoBase>::Entity as EntityTrait>::Model;
type PrimaryKeyValue<D> =
    <<<D as DaoBase>::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Row-level access shared by every entity keyed by an auto-increment
/// integer id.
#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized {
    type Entity: EntityTrait + Send + Sync;
    /// Name used in not-found errors.
    const ENTITY_NAME: &'static str;

    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;

    /// Inserts the row and returns it with its assigned id.
    async fn create<A>(&self, active: A) -> DaoResult<ModelOf<Self>>
    where
        A: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send,
        ModelOf<Self>: IntoActiveModel<A>,
    {
        active.insert(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn find_by_id(&self, id: i32) -> DaoResult<ModelOf<Self>>
    where
        PrimaryKeyValue<Self>: From<i32>,
    {
        let model = Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        model.ok_or(DaoLayerError::NotFound {
            entity: Self::ENTITY_NAME,
            id,
        })
    }

    /// Every row the shaped query yields. There is no paging: rosters and
    /// attendance histories are small.
    async fn find_all<F>(&self, apply: F) -> DaoResult<Vec<ModelOf<Self>>>
    where
        F: FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    {
        apply(Self::Entity::find())
            .all(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn delete(&self, id: i32) -> DaoResult<i32>
    where
        PrimaryKeyValue<Self>: From<i32>,
    {
        let result = Self::Entity::delete_by_id(id)
            .exec(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound {
                entity: Self::ENTITY_NAME,
                id,
            });
        }

        Ok(id)
    }
}
