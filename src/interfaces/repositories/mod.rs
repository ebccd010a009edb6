pub mod course;
pub mod inquiry;
pub mod project;
pub mod sqlx_repo;
