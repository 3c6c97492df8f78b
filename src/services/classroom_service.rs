use crate::{
    db::dao::ClassroomDao, db::entities::classroom, error::AppError, services::input,
};

#[derive(Clone)]
pub struct ClassroomService {
    classroom_dao: ClassroomDao,
}

impl ClassroomService {
    pub fn new(classroom_dao: ClassroomDao) -> Self {
        Self { classroom_dao }
    }

    pub async fn create(&self, name: &str) -> Result<classroom::Model, AppError> {
        let name = input::required_text("Classroom name", name)?;
        let classroom = self.classroom_dao.create_classroom(&name).await?;
        tracing::info!(classroom_id = classroom.id, name = %classroom.name, "classroom created");
        Ok(classroom)
    }

    pub async fn list(&self) -> Result<Vec<classroom::Model>, AppError> {
        Ok(self.classroom_dao.list_classrooms().await?)
    }

    pub async fn get(&self, id: i32) -> Result<classroom::Model, AppError> {
        Ok(self.classroom_dao.find_classroom(id).await?)
    }

    /// Deletes the classroom and every student enrolled in it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let removed = self.classroom_dao.delete_classroom(id).await?;
        tracing::info!(classroom_id = id, students_removed = removed, "classroom deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::AppError, services::ServiceContext, test_helpers::memory_db};

    #[tokio::test]
    async fn created_classroom_is_listed_once_with_a_stable_id() {
        let db = memory_db().await;
        let service = ServiceContext::new(&db).classroom();

        let created = service.create("  3º ano B ").await.expect("create classroom");
        assert_eq!(created.name, "3º ano B");

        let first = service.list().await.expect("list classrooms");
        let second = service.list().await.expect("list classrooms again");
        assert_eq!(first, second);
        assert_eq!(
            first.iter().filter(|classroom| classroom.id == created.id).count(),
            1
        );

        let fetched = service.get(created.id).await.expect("get classroom");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn blank_names_are_rejected() {
        let db = memory_db().await;
        let service = ServiceContext::new(&db).classroom();

        let err = service.create("   ").await.expect_err("blank name should fail");
        assert!(matches!(err, AppError::Validation(_)));
        assert!(service.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn delete_cascades_to_students() {
        let db = memory_db().await;
        let services = ServiceContext::new(&db);
        let classroom = services.classroom().create("2A").await.expect("create");
        let other = services.classroom().create("2B").await.expect("create");

        let mut enrolled = Vec::new();
        for name in ["Ana", "Beto", "Caio"] {
            let student = services
                .student()
                .create(name, classroom.id, 11)
                .await
                .expect("enroll");
            enrolled.push(student.id);
        }
        let survivor = services
            .student()
            .create("Dora", other.id, 12)
            .await
            .expect("enroll");

        services
            .classroom()
            .delete(classroom.id)
            .await
            .expect("delete classroom");

        assert!(matches!(
            services.classroom().get(classroom.id).await,
            Err(AppError::NotFound(_))
        ));
        for id in enrolled {
            assert!(matches!(
                services.student().get(id).await,
                Err(AppError::NotFound(_))
            ));
        }
        assert_eq!(
            services.student().get(survivor.id).await.expect("survivor"),
            survivor
        );
    }

    #[tokio::test]
    async fn deleting_a_missing_classroom_is_not_found() {
        let db = memory_db().await;
        let service = ServiceContext::new(&db).classroom();

        let err = service.delete(404).await.expect_err("missing classroom");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
