pub mod course;
pub mod inquiry;
pub mod project;
