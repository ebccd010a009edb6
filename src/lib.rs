mod domain;
mod infrastructure;
mod interfaces;

pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{db, sitegen, storage, telemetry};
pub use interfaces::{handlers, repositories, routes};

use repositories::sqlx_repo::{SqlxCourseRepo, SqlxInquiryRepo, SqlxProjectRepo};
use use_cases::{courses::CourseHandler, inquiries::InquiryHandler, projects::ProjectHandler};

pub struct AppState {
    pub project_handler: ProjectHandler<SqlxProjectRepo>,
    pub course_handler: CourseHandler<SqlxCourseRepo>,
    pub inquiry_handler: InquiryHandler<SqlxInquiryRepo>,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        AppState {
            project_handler: ProjectHandler::new(SqlxProjectRepo::new(pool.clone())),
            course_handler: CourseHandler::new(SqlxCourseRepo::new(pool.clone())),
            inquiry_handler: InquiryHandler::new(SqlxInquiryRepo::new(pool)),
        }
    }
}
