use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        attendance_service::AttendanceService, classroom_service::ClassroomService,
        student_service::StudentService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn classroom(&self) -> ClassroomService {
        ClassroomService::new(self.daos.classroom())
    }

    pub fn student(&self) -> StudentService {
        StudentService::new(self.daos.student(), self.daos.classroom())
    }

    pub fn attendance(&self) -> AttendanceService {
        AttendanceService::new(
            self.daos.attendance(),
            self.daos.classroom(),
            self.daos.student(),
        )
    }
}
