use crate::labeler::utils::label_record::LabelRecord;

pub const LABEL_FILE_EXTENSION: &str = "txt";
/// Longest file name, in bytes, the common filesystems accept.
pub const MAX_FILE_NAME_LENGTH: usize = 255;

/// All boxes of one image, in the order the client drew them.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFile {
    image_filename: String,
    records: Vec<LabelRecord>,
}

impl LabelFile {
    pub fn new<T: Into<String>>(image_filename: T, records: Vec<LabelRecord>) -> Self {
        Self {
            image_filename: image_filename.into(),
            records,
        }
    }

    pub fn records(&self) -> &[LabelRecord] {
        &self.records
    }

    pub fn file_name(&self) -> String {
        label_file_name(&self.image_filename)
    }

    pub fn has_valid_file_name(&self) -> bool {
        self.file_name().len() <= MAX_FILE_NAME_LENGTH
    }

    pub fn to_yolo_string(&self) -> String {
        self.records.iter().map(LabelRecord::to_string).collect::<Vec<_>>().join("\n")
    }
}

pub fn label_file_name(image_filename: &str) -> String {
    format!("{}.{}", file_stem(image_filename), LABEL_FILE_EXTENSION)
}

/// Strips the last extension. Dots leading the name never start one.
pub fn file_stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(index) if filename[..index].chars().any(|c| c != '.') => &filename[..index],
        _ => filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_only_last_extension() {
        assert_eq!(file_stem("img1.png"), "img1");
        assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
        assert_eq!(file_stem("noext"), "noext");
        assert_eq!(file_stem("trailing."), "trailing");
    }

    #[test]
    fn stem_keeps_leading_dots() {
        assert_eq!(file_stem(".hidden"), ".hidden");
        assert_eq!(file_stem("..png"), "..png");
        assert_eq!(file_stem(".hidden.jpg"), ".hidden");
    }

    #[test]
    fn label_file_name_replaces_extension() {
        assert_eq!(label_file_name("img1.png"), "img1.txt");
        assert_eq!(label_file_name("imagen.jpg"), "imagen.txt");
        assert_eq!(label_file_name("scan"), "scan.txt");
    }

    #[test]
    fn label_file_name_must_fit_the_filesystem() {
        let fits = LabelFile::new(format!("{}.png", "a".repeat(251)), Vec::new());
        assert_eq!(fits.file_name().len(), 255);
        assert!(fits.has_valid_file_name());
        let too_long = LabelFile::new("a".repeat(253), Vec::new());
        assert_eq!(too_long.file_name().len(), 257);
        assert!(!too_long.has_valid_file_name());
    }

    #[test]
    fn yolo_string_keeps_input_order_without_trailing_newline() {
        let label_file = LabelFile::new("street.jpg", vec![
            LabelRecord::new(1, 0.9, 0.1, 0.2, 0.2),
            LabelRecord::new(0, 0.1, 0.9, 0.3, 0.4),
        ]);
        assert_eq!(label_file.file_name(), "street.txt");
        assert_eq!(label_file.to_yolo_string(), "1 0.900000 0.100000 0.200000 0.200000\n0 0.100000 0.900000 0.300000 0.400000");
    }

    #[test]
    fn empty_label_file_is_empty_text() {
        let label_file = LabelFile::new("empty.png", Vec::new());
        assert_eq!(label_file.to_yolo_string(), "");
        assert_eq!(label_file.file_name(), "empty.txt");
    }
}
