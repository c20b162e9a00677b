use actix_web::{post, web, HttpResponse, Responder};
use common::labeler::utils::response::{ErrorResponse, SaveLabelsResponse};
use common::labeler::utils::save_labels_request::SaveLabelsRequest;
use sanitize_filename::sanitize;
use crate::labeler::storage::Storage;
use crate::utils::logging::*;

pub fn initialize(cfg: &mut web::ServiceConfig) {
    cfg.service(save_labels);
}

#[post("/save_labels")]
async fn save_labels(storage: web::Data<Storage>, request: Result<web::Json<SaveLabelsRequest>, actix_web::Error>) -> impl Responder {
    let request = match request {
        Ok(request) => request.into_inner(),
        Err(err) => {
            let entry = RequestEntry::InvalidLabelPayload(err.to_string());
            logging_warning!(entry.to_string());
            return HttpResponse::BadRequest().json(ErrorResponse::new(entry));
        }
    };
    let image_filename = sanitize(request.filename());
    if image_filename.is_empty() {
        logging_warning!(RequestEntry::InvalidFileName, format!("Filename: {:?}", request.filename()));
        return HttpResponse::BadRequest().json(ErrorResponse::new(RequestEntry::InvalidFileName));
    }
    let label_file = request.into_label_file(image_filename);
    if !label_file.has_valid_file_name() {
        let entry = RequestEntry::LabelFileNameTooLong(label_file.file_name());
        logging_warning!(entry.to_string());
        return HttpResponse::BadRequest().json(ErrorResponse::new(entry));
    }
    match storage.save_labels(&label_file).await {
        Ok(_) => {
            let file_name = label_file.file_name();
            logging_information!(RequestEntry::LabelsSaved(label_file.records().len(), file_name.clone()));
            HttpResponse::Ok().json(SaveLabelsResponse::new(file_name))
        },
        Err(entry) => {
            let message = entry.to_string();
            logging_error!(message.clone());
            HttpResponse::InternalServerError().json(ErrorResponse::new(message))
        },
    }
}
