use crate::{
    db::dao::{ClassroomDao, StudentDao},
    db::entities::student,
    error::AppError,
    services::input,
};

#[derive(Clone)]
pub struct StudentService {
    student_dao: StudentDao,
    classroom_dao: ClassroomDao,
}

impl StudentService {
    pub fn new(student_dao: StudentDao, classroom_dao: ClassroomDao) -> Self {
        Self {
            student_dao,
            classroom_dao,
        }
    }

    /// Enrolls a student. An unknown `classroom_id` is reported as not found
    /// and nothing is written.
    pub async fn create(
        &self,
        name: &str,
        classroom_id: i32,
        guardian_phone: i64,
    ) -> Result<student::Model, AppError> {
        let name = input::required_text("Student name", name)?;
        self.classroom_dao.find_classroom(classroom_id).await?;

        let student = self
            .student_dao
            .create_student(&name, classroom_id, guardian_phone)
            .await?;
        tracing::info!(
            student_id = student.id,
            classroom_id,
            name = %student.name,
            "student enrolled"
        );
        Ok(student)
    }

    /// Same as [`StudentService::create`] but takes the phone number as
    /// submitted text.
    pub async fn create_from_text(
        &self,
        name: &str,
        classroom_id: i32,
        guardian_phone: &str,
    ) -> Result<student::Model, AppError> {
        let name = input::required_text("Student name", name)?;
        let guardian_phone = input::parse_phone(guardian_phone)?;
        self.create(&name, classroom_id, guardian_phone).await
    }

    pub async fn get(&self, id: i32) -> Result<student::Model, AppError> {
        Ok(self.student_dao.find_student(id).await?)
    }

    pub async fn list_by_classroom(
        &self,
        classroom_id: i32,
    ) -> Result<Vec<student::Model>, AppError> {
        Ok(self.student_dao.list_by_classroom(classroom_id).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<student::Model>, AppError> {
        Ok(self.student_dao.list_all().await?)
    }

    /// Attendance recorded under the student's name is kept.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.student_dao.delete_student(id).await?;
        tracing::info!(student_id = id, "student deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::AppError, services::ServiceContext, test_helpers::memory_db};

    #[tokio::test]
    async fn unknown_classroom_is_not_found_and_nothing_is_written() {
        let db = memory_db().await;
        let service = ServiceContext::new(&db).student();

        let err = service
            .create("Ana", 12, 5511999)
            .await
            .expect_err("unknown classroom");
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(service.list_all().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn phone_text_is_validated_before_any_lookup() {
        let db = memory_db().await;
        let service = ServiceContext::new(&db).student();

        let err = service
            .create_from_text("Ana", 12, "call mom")
            .await
            .expect_err("bad phone");
        assert!(matches!(err, AppError::Validation(_)));

        let err = service
            .create_from_text("", 12, "123")
            .await
            .expect_err("blank name");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn roster_is_sorted_ignoring_case() {
        let db = memory_db().await;
        let services = ServiceContext::new(&db);
        let classroom = services.classroom().create("4C").await.expect("create");

        for name in ["beto", "Ana", "carlos"] {
            services
                .student()
                .create_from_text(name, classroom.id, "123")
                .await
                .expect("enroll");
        }

        let names: Vec<String> = services
            .student()
            .list_by_classroom(classroom.id)
            .await
            .expect("roster")
            .into_iter()
            .map(|student| student.name)
            .collect();
        assert_eq!(names, ["Ana", "beto", "carlos"]);
    }

    #[tokio::test]
    async fn delete_reports_missing_students() {
        let db = memory_db().await;
        let services = ServiceContext::new(&db);
        let classroom = services.classroom().create("5A").await.expect("create");
        let student = services
            .student()
            .create("Ana", classroom.id, 1)
            .await
            .expect("enroll");

        services.student().delete(student.id).await.expect("delete");
        let err = services
            .student()
            .delete(student.id)
            .await
            .expect_err("second delete");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
