pub mod attendance;
pub mod classrooms;
pub mod public;
mod router;
pub mod students;

pub use router::router;
