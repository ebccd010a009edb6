use actix_web::web;

use crate::handlers::inquiries;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/inquiries")
            .service(web::resource("").route(web::post().to(inquiries::submit_inquiry))),
    );
}
