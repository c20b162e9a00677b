use serde::{Deserialize, Serialize};

pub const LABELS_SAVED_MESSAGE: &str = "Labels saved";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UploadImageResponse {
    pub filename: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SaveLabelsResponse {
    pub message: String,
    pub label_file: String,
}

impl SaveLabelsResponse {
    pub fn new(label_file: String) -> Self {
        Self {
            message: LABELS_SAVED_MESSAGE.to_string(),
            label_file,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new<T: Into<String>>(error: T) -> Self {
        Self {
            error: error.into(),
        }
    }
}
