use crate::labeler::utils::label_file::LabelFile;
use crate::labeler::utils::label_record::LabelRecord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_FILENAME: &str = "imagen.jpg";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SaveLabelsRequest {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<LabelRecord>>,
}

impl SaveLabelsRequest {
    pub fn filename(&self) -> &str {
        self.filename.as_deref().unwrap_or(DEFAULT_IMAGE_FILENAME)
    }

    /// The caller passes the already sanitized image filename.
    pub fn into_label_file<T: Into<String>>(self, image_filename: T) -> LabelFile {
        LabelFile::new(image_filename, self.labels.unwrap_or_default())
    }
}
