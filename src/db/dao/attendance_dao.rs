use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::attendance_entry;
use crate::db::entities::prelude::AttendanceEntry;

#[derive(Clone)]
pub struct AttendanceDao {
    db: DatabaseConnection,
}

impl DaoBase for AttendanceDao {
    type Entity = AttendanceEntry;
    const ENTITY_NAME: &'static str = "attendance entry";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl AttendanceDao {
    /// No check is made that `student_name` belongs to an enrolled student.
    pub async fn create_entry(
        &self,
        date: &str,
        student_name: &str,
        present: i32,
    ) -> DaoResult<attendance_entry::Model> {
        let model = attendance_entry::ActiveModel {
            date: Set(date.to_string()),
            student_name: Set(student_name.to_string()),
            present: Set(present),
            ..Default::default()
        };
        self.create(model).await
    }

    /// Exact, case-sensitive match on the stored name, in recording order.
    pub async fn list_by_student_name(
        &self,
        student_name: &str,
    ) -> DaoResult<Vec<attendance_entry::Model>> {
        let student_name = student_name.to_string();
        self.find_all(move |query| {
            query
                .filter(attendance_entry::Column::StudentName.eq(student_name))
                .order_by_asc(attendance_entry::Column::Id)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::AttendanceDao;
    use crate::db::dao::DaoBase;
    use crate::test_helpers::memory_db;

    #[tokio::test]
    async fn entries_match_names_exactly() {
        let db = memory_db().await;
        let dao = AttendanceDao::new(&db);

        let ana = dao
            .create_entry("2024-05-01", "Ana", 1)
            .await
            .expect("create entry");
        dao.create_entry("2024-05-01", "ana", 0)
            .await
            .expect("create entry");
        dao.create_entry("2024-05-02", "Ana ", 1)
            .await
            .expect("create entry");

        let entries = dao
            .list_by_student_name("Ana")
            .await
            .expect("query entries");
        assert_eq!(entries, vec![ana]);
    }

    #[tokio::test]
    async fn unknown_flags_are_stored_verbatim() {
        let db = memory_db().await;
        let dao = AttendanceDao::new(&db);

        let entry = dao
            .create_entry("ontem", "Zeca", 7)
            .await
            .expect("create entry");

        assert_eq!(entry.present, 7);
        assert!(!entry.is_present());
        assert_eq!(entry.date, "ontem");
    }
}
