pub mod label_file;
pub mod label_record;
pub mod response;
pub mod save_labels_request;
