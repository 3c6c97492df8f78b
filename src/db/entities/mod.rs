#[allow(unused_imports)]
pub mod prelude {
    pub use super::attendance_entry::Entity as AttendanceEntry;
    pub use super::classroom::Entity as Classroom;
    pub use super::student::Entity as Student;
}

pub mod attendance_entry;
pub mod classroom;
pub mod student;
