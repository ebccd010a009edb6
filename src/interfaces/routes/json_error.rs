use actix_web::{error::JsonPayloadError, web};

use crate::errors::ApiError;

/// Routes malformed JSON payloads through the uniform `{"detail": ...}` body
/// instead of actix's default plain-text response.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        json_payload_error(err).into()
    }));
}

fn json_payload_error(err: JsonPayloadError) -> ApiError {
    ApiError::Validation(format!("Invalid JSON payload: {err}"))
}
