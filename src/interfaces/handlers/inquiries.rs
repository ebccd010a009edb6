use actix_web::{HttpResponse, Responder, web};
use tracing::instrument;

use crate::{AppState, entities::inquiry::NewInquiry, errors::ApiError};

#[instrument(skip(state, data))]
pub async fn submit_inquiry(
    state: web::Data<AppState>,
    data: web::Json<NewInquiry>,
) -> Result<impl Responder, ApiError> {
    let response = state
        .inquiry_handler
        .create_inquiry(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}
