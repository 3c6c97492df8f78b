pub mod attendance_dao;
pub mod base;
pub mod classroom_dao;
mod context;
pub mod error;
pub mod student_dao;

pub use attendance_dao::AttendanceDao;
pub use base::DaoBase;
pub use classroom_dao::ClassroomDao;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use student_dao::StudentDao;
