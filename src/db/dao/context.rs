use sea_orm::DatabaseConnection;

use super::{AttendanceDao, ClassroomDao, DaoBase, StudentDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn classroom(&self) -> ClassroomDao {
        DaoBase::new(&self.db)
    }

    pub fn student(&self) -> StudentDao {
        DaoBase::new(&self.db)
    }

    pub fn attendance(&self) -> AttendanceDao {
        DaoBase::new(&self.db)
    }
}
