use actix_web::web;

use crate::handlers::courses;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/courses")
            .service(web::resource("").route(web::get().to(courses::list_courses)))
            .service(web::resource("/{course_id}").route(web::get().to(courses::get_course))),
    );
}
