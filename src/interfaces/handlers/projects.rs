use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::instrument;

use crate::{AppState, errors::ApiError};

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    /// web, mobile, desktop, fullstack, backend or frontend.
    pub project_type: Option<String>,
}

#[instrument(skip(state, query))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectsQuery>,
) -> Result<impl Responder, ApiError> {
    let projects = state
        .project_handler
        .list_projects(query.into_inner().project_type)
        .await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let project = state.project_handler.get_project(&project_id).await?;

    Ok(HttpResponse::Ok().json(project))
}
