use actix_web::{get, web, HttpResponse, Responder, Scope};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use crate::utils::logging::Logger;

pub fn initialize() -> Scope {
    web::scope("/log")
        .service(system_log)
        .service(system_log_since)
}

#[get("/system_log")]
async fn system_log() -> impl Responder {
    let logs = Logger::get_system_logs().await;
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(Logger::format_logs(&logs))
}

#[get("/system_log/since/{since}")]
async fn system_log_since(since: web::Path<String>) -> impl Responder {
    match parse_datetime(&since.into_inner()) {
        Some(since_time) => {
            let logs = Logger::get_system_logs_since(since_time).await;
            HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(Logger::format_logs(&logs))
        },
        None => HttpResponse::BadRequest().body("Invalid datetime format."),
    }
}

fn parse_datetime(datetime_str: &str) -> Option<DateTime<Local>> {
    let naive_date_time = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d-%H-%M-%S").ok()?;
    Local.from_local_datetime(&naive_date_time).earliest()
}
