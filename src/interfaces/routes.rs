use actix_web::web;

use crate::handlers::{home, system};

mod courses;
mod inquiries;
mod json_error;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    cfg.route("/", web::get().to(home::home));
    cfg.route("/health", web::get().to(system::health_check));

    cfg.service(
        web::scope(api_prefix)
            .configure(projects::config_routes)
            .configure(courses::config_routes)
            .configure(inquiries::config_routes),
    );

    cfg.configure(json_error::config_routes);
}
