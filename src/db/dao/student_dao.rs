use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, QueryFilter, QueryOrder, Set, SqlErr,
};

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::Student;
use crate::db::entities::student;

#[derive(Clone)]
pub struct StudentDao {
    db: DatabaseConnection,
}

impl DaoBase for StudentDao {
    type Entity = Student;
    const ENTITY_NAME: &'static str = "student";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl StudentDao {
    /// Fails with [`DaoLayerError::Integrity`] when `classroom_id` does not
    /// reference an existing classroom.
    pub async fn create_student(
        &self,
        name: &str,
        classroom_id: i32,
        guardian_phone: i64,
    ) -> DaoResult<student::Model> {
        let model = student::ActiveModel {
            name: Set(name.to_string()),
            classroom_id: Set(classroom_id),
            guardian_phone: Set(guardian_phone),
            ..Default::default()
        };
        match self.create(model).await {
            Err(DaoLayerError::Db(err)) => Err(classify_insert_error(err, classroom_id)),
            other => other,
        }
    }

    pub async fn find_student(&self, id: i32) -> DaoResult<student::Model> {
        self.find_by_id(id).await
    }

    pub async fn list_by_classroom(&self, classroom_id: i32) -> DaoResult<Vec<student::Model>> {
        let mut students = self
            .find_all(|query| {
                query
                    .filter(student::Column::ClassroomId.eq(classroom_id))
                    .order_by_asc(student::Column::Id)
            })
            .await?;
        sort_by_name(&mut students);
        Ok(students)
    }

    pub async fn list_all(&self) -> DaoResult<Vec<student::Model>> {
        let mut students = self
            .find_all(|query| query.order_by_asc(student::Column::Id))
            .await?;
        sort_by_name(&mut students);
        Ok(students)
    }

    pub async fn delete_student(&self, id: i32) -> DaoResult<i32> {
        self.delete(id).await
    }
}

fn classify_insert_error(err: DbErr, classroom_id: i32) -> DaoLayerError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => DaoLayerError::Integrity {
            entity: "classroom",
            id: classroom_id,
        },
        _ => DaoLayerError::Db(err),
    }
}

/// Case-insensitive ascending by name; equal names keep id order.
pub fn sort_by_name(students: &mut [student::Model]) {
    students.sort_by_cached_key(|student| student.name.to_lowercase());
}
