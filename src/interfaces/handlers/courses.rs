use actix_web::{HttpResponse, Responder, web};
use tracing::instrument;

use crate::{AppState, errors::ApiError};

#[instrument(skip(state))]
pub async fn list_courses(state: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    let courses = state.course_handler.list_courses().await?;

    Ok(HttpResponse::Ok().json(courses))
}

#[instrument(skip(state))]
pub async fn get_course(
    course_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let course = state.course_handler.get_course(course_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(course))
}
