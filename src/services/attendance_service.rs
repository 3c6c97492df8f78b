use crate::{
    db::dao::{AttendanceDao, ClassroomDao, StudentDao},
    db::entities::{attendance_entry, classroom, student},
    error::AppError,
    services::input,
};

#[derive(Clone)]
pub struct AttendanceService {
    attendance_dao: AttendanceDao,
    classroom_dao: ClassroomDao,
    student_dao: StudentDao,
}

impl AttendanceService {
    pub fn new(
        attendance_dao: AttendanceDao,
        classroom_dao: ClassroomDao,
        student_dao: StudentDao,
    ) -> Self {
        Self {
            attendance_dao,
            classroom_dao,
            student_dao,
        }
    }

    /// The classroom and its roster, in the order the roll call lists them.
    pub async fn roster(
        &self,
        classroom_id: i32,
    ) -> Result<(classroom::Model, Vec<student::Model>), AppError> {
        let classroom = self.classroom_dao.find_classroom(classroom_id).await?;
        let students = self.student_dao.list_by_classroom(classroom_id).await?;
        Ok((classroom, students))
    }

    /// Records one entry per `(names[i], flags[i])` pair for `date`.
    ///
    /// The date, names and flags are stored as given; only a blank date is
    /// refused. Names are not checked against the roster. Entries are written one at a time: if a write fails, the ones
    /// before it stay recorded and the error is returned.
    pub async fn record_batch(
        &self,
        classroom_id: i32,
        date: &str,
        names: &[String],
        flags: &[i32],
    ) -> Result<Vec<attendance_entry::Model>, AppError> {
        input::required_text("Date", date)?;
        if names.len() != flags.len() {
            return Err(AppError::validation(format!(
                "Roll call has {} names but {} presence flags",
                names.len(),
                flags.len()
            )));
        }
        self.classroom_dao.find_classroom(classroom_id).await?;

        let mut recorded = Vec::with_capacity(names.len());
        for (name, flag) in names.iter().zip(flags) {
            match self.attendance_dao.create_entry(date, name, *flag).await {
                Ok(entry) => recorded.push(entry),
                Err(err) => {
                    tracing::error!(
                        classroom_id,
                        date = %date,
                        recorded = recorded.len(),
                        total = names.len(),
                        error = %err,
                        "roll call interrupted; entries already recorded were kept"
                    );
                    return Err(err.into());
                }
            }
        }

        tracing::info!(
            classroom_id,
            date = %date,
            recorded = recorded.len(),
            "roll call recorded"
        );
        Ok(recorded)
    }

    pub async fn record_form(
        &self,
        classroom_id: i32,
        form: &input::RollCallForm,
    ) -> Result<Vec<attendance_entry::Model>, AppError> {
        self.record_batch(classroom_id, &form.date, &form.names, &form.flags)
            .await
    }

    pub async fn query_by_student_name(
        &self,
        name: &str,
    ) -> Result<Vec<attendance_entry::Model>, AppError> {
        Ok(self.attendance_dao.list_by_student_name(name).await?)
    }

    /// Looks the student up and returns the entries stored under their
    /// current name. Entries recorded under another spelling are not found.
    pub async fn query_by_student_id(
        &self,
        student_id: i32,
    ) -> Result<(student::Model, Vec<attendance_entry::Model>), AppError> {
        let student = self.student_dao.find_student(student_id).await?;
        let entries = self
            .attendance_dao
            .list_by_student_name(&student.name)
            .await?;
        Ok((student, entries))
    }
}
