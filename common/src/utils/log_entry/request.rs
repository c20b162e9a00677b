use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestEntry {
    #[error("No image was sent")]
    MissingImage,
    #[error("Invalid file name")]
    InvalidFileName,
    #[error("Label file name {0} is too long")]
    LabelFileNameTooLong(String),
    #[error("Invalid multipart payload: {0}")]
    InvalidMultipart(String),
    #[error("Invalid label payload: {0}")]
    InvalidLabelPayload(String),
    #[error("Image {0} saved")]
    ImageSaved(String),
    #[error("{0} label(s) saved to {1}")]
    LabelsSaved(usize, String),
}

impl From<RequestEntry> for String {
    #[inline(always)]
    fn from(value: RequestEntry) -> Self {
        value.to_string()
    }
}
