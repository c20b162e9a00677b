use actix_web::web;

pub mod default;
pub mod image;
pub mod label;
pub mod log;

pub fn initialize(cfg: &mut web::ServiceConfig) {
    cfg.configure(image::initialize)
        .configure(label::initialize)
        .service(log::initialize());
}
