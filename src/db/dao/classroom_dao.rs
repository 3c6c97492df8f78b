use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::{Classroom, Student};
use crate::db::entities::{classroom, student};

#[derive(Clone)]
pub struct ClassroomDao {
    db: DatabaseConnection,
}

impl DaoBase for ClassroomDao {
    type Entity = Classroom;
    const ENTITY_NAME: &'static str = "classroom";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ClassroomDao {
    pub async fn create_classroom(&self, name: &str) -> DaoResult<classroom::Model> {
        let model = classroom::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_classrooms(&self) -> DaoResult<Vec<classroom::Model>> {
        self.find_all(|query| query.order_by_asc(classroom::Column::Id))
            .await
    }

    pub async fn find_classroom(&self, id: i32) -> DaoResult<classroom::Model> {
        self.find_by_id(id).await
    }

    /// Removes the classroom together with its roster in one transaction and
    /// returns how many students went with it. Attendance entries are not
    /// touched.
    pub async fn delete_classroom(&self, id: i32) -> DaoResult<u64> {
        let txn = self.db.begin().await?;

        let students = Student::delete_many()
            .filter(student::Column::ClassroomId.eq(id))
            .exec(&txn)
            .await?;
        let result = Classroom::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DaoLayerError::NotFound {
                entity: Self::ENTITY_NAME,
                id,
            });
        }

        txn.commit().await?;
        Ok(students.rows_affected)
    }
}
