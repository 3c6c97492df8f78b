pub mod attendance_service;
pub mod classroom_service;
pub mod context;
pub mod input;
pub mod student_service;

pub use context::ServiceContext;
