use actix_multipart::{Field, Multipart};
use actix_web::http::header::ContentDisposition;
use actix_web::{post, web, HttpResponse, Responder};
use common::labeler::utils::response::{ErrorResponse, UploadImageResponse};
use futures::StreamExt;
use sanitize_filename::sanitize;
use crate::labeler::storage::Storage;
use crate::utils::logging::*;

pub const IMAGE_FIELD_NAME: &str = "image";

pub fn initialize(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_image);
}

#[post("/upload_image")]
async fn upload_image(storage: web::Data<Storage>, mut payload: Multipart) -> impl Responder {
    while let Some(field) = payload.next().await {
        let mut field = match field {
            Ok(field) => field,
            Err(err) => {
                let entry = RequestEntry::InvalidMultipart(err.to_string());
                logging_warning!(entry.to_string());
                return HttpResponse::BadRequest().json(ErrorResponse::new(entry));
            }
        };
        if !is_image_field(&field) {
            continue;
        }
        let file_name = match field.content_disposition().and_then(get_file_name) {
            Some(file_name) => file_name,
            None => break,
        };
        let sanitized_file_name = sanitize(&file_name);
        if sanitized_file_name.is_empty() {
            logging_warning!(RequestEntry::InvalidFileName, format!("Filename: {file_name:?}"));
            return HttpResponse::BadRequest().json(ErrorResponse::new(RequestEntry::InvalidFileName));
        }
        return match storage.save_image(&sanitized_file_name, &mut field).await {
            Ok(_) => {
                logging_information!(RequestEntry::ImageSaved(sanitized_file_name.clone()));
                HttpResponse::Ok().json(UploadImageResponse { filename: sanitized_file_name })
            },
            Err(entry) if entry.is_client_error() => {
                let message = entry.to_string();
                logging_warning!(message.clone());
                HttpResponse::BadRequest().json(ErrorResponse::new(message))
            },
            Err(entry) => {
                let message = entry.to_string();
                logging_error!(message.clone());
                HttpResponse::InternalServerError().json(ErrorResponse::new(message))
            },
        };
    }
    logging_warning!(RequestEntry::MissingImage);
    HttpResponse::BadRequest().json(ErrorResponse::new(RequestEntry::MissingImage))
}

fn is_image_field(field: &Field) -> bool {
    field.name() == Some(IMAGE_FIELD_NAME)
}

fn get_file_name(content_disposition: &ContentDisposition) -> Option<String> {
    content_disposition.get_filename().map(str::to_string)
}
