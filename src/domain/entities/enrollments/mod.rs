pub mod enrollment;

pub use enrollment::Enrollment;
