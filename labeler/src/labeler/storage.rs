use actix_web::web::Bytes;
use common::labeler::utils::label_file::LabelFile;
use futures::{Stream, StreamExt};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;
use crate::utils::logging::*;

/// Filesystem layout shared by the handlers. File names must already be sanitized.
#[derive(Debug, Clone)]
pub struct Storage {
    upload_directory: PathBuf,
    label_directory: PathBuf,
}

impl Storage {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(upload_directory: P, label_directory: Q) -> Self {
        Self {
            upload_directory: upload_directory.into(),
            label_directory: label_directory.into(),
        }
    }

    pub fn upload_directory(&self) -> &Path {
        &self.upload_directory
    }

    pub fn label_directory(&self) -> &Path {
        &self.label_directory
    }

    pub async fn initialize(&self) -> Result<(), IOEntry> {
        for directory in [&self.upload_directory, &self.label_directory] {
            fs::create_dir_all(directory).await
                .map_err(|err| IOEntry::CreateDirectoryError(directory.display().to_string(), err))?;
        }
        Ok(())
    }

    pub async fn save_image<S, E>(&self, filename: &str, stream: S) -> Result<PathBuf, IOEntry>
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin,
        E: Display,
    {
        let file_path = self.upload_directory.join(filename);
        write_atomically(&file_path, stream).await?;
        Ok(file_path)
    }

    pub async fn save_labels(&self, label_file: &LabelFile) -> Result<PathBuf, IOEntry> {
        let file_path = self.label_directory.join(label_file.file_name());
        let content = Bytes::from(label_file.to_yolo_string());
        let stream = futures::stream::iter([Ok::<_, std::convert::Infallible>(content)]);
        write_atomically(&file_path, stream).await?;
        Ok(file_path)
    }
}

// Readers only ever see a complete file: data lands in a hidden sibling and is renamed into place.
async fn write_atomically<S, E>(file_path: &Path, stream: S) -> Result<(), IOEntry>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: Display,
{
    let temporary_path = temporary_path(file_path);
    if let Err(entry) = write_stream(&temporary_path, file_path, stream).await {
        let _ = fs::remove_file(&temporary_path).await;
        return Err(entry);
    }
    if let Err(err) = fs::rename(&temporary_path, file_path).await {
        let _ = fs::remove_file(&temporary_path).await;
        return Err(IOEntry::MoveFileError(temporary_path.display().to_string(), file_path.display().to_string(), err));
    }
    Ok(())
}

async fn write_stream<S, E>(temporary_path: &Path, file_path: &Path, mut stream: S) -> Result<(), IOEntry>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: Display,
{
    let mut file = File::create(temporary_path).await
        .map_err(|err| IOEntry::CreateFileError(temporary_path.display().to_string(), err))?;
    while let Some(chunk) = stream.next().await {
        let data = chunk.map_err(|err| IOEntry::ReceiveStreamError(file_path.display().to_string(), err.to_string()))?;
        file.write_all(&data).await
            .map_err(|err| IOEntry::WriteFileError(temporary_path.display().to_string(), err))?;
    }
    file.flush().await
        .map_err(|err| IOEntry::WriteFileError(temporary_path.display().to_string(), err))?;
    Ok(())
}

// Fixed length, so any name the target directory accepts also fits here.
fn temporary_path(file_path: &Path) -> PathBuf {
    file_path.with_file_name(format!(".{}.part", Uuid::new_v4()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::labeler::utils::label_record::LabelRecord;
    use tempfile::TempDir;

    fn storage(temp_dir: &TempDir) -> Storage {
        Storage::new(temp_dir.path().join("uploads"), temp_dir.path().join("labels"))
    }

    fn chunks(parts: &[&'static [u8]]) -> impl Stream<Item = Result<Bytes, String>> + Unpin {
        futures::stream::iter(parts.iter().map(|part| Ok(Bytes::from_static(*part))).collect::<Vec<_>>())
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        storage.initialize().await.unwrap();
        storage.initialize().await.unwrap();
        assert!(storage.upload_directory().is_dir());
        assert!(storage.label_directory().is_dir());
    }

    #[tokio::test]
    async fn image_is_stored_verbatim_and_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        storage.initialize().await.unwrap();
        let path = storage.save_image("cat.png", chunks(&[b"\x89PNG", b"\r\n\x1a\n", b"rest"])).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG\r\n\x1a\nrest");
        storage.save_image("cat.png", chunks(&[b"second"])).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn broken_stream_leaves_no_file_behind() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        storage.initialize().await.unwrap();
        let stream = futures::stream::iter(vec![Ok(Bytes::from_static(b"partial")), Err("connection reset".to_string())]);
        let entry = storage.save_image("cut.png", stream).await.unwrap_err();
        assert!(entry.is_client_error());
        assert_eq!(std::fs::read_dir(storage.upload_directory()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn missing_directory_is_a_server_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let entry = storage.save_image("cat.png", chunks(&[b"data"])).await.unwrap_err();
        assert!(!entry.is_client_error());
    }

    #[tokio::test]
    async fn long_names_are_stored_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        storage.initialize().await.unwrap();
        let image_name = format!("{}.png", "a".repeat(230));
        let image_path = storage.save_image(&image_name, chunks(&[b"long"])).await.unwrap();
        assert_eq!(image_path, storage.upload_directory().join(&image_name));
        assert_eq!(std::fs::read(&image_path).unwrap(), b"long");
        let label_path = storage.save_labels(&LabelFile::new(image_name, vec![LabelRecord::new(0, 0.5, 0.5, 0.5, 0.5)])).await.unwrap();
        assert_eq!(label_path, storage.label_directory().join(format!("{}.txt", "a".repeat(230))));
        assert_eq!(std::fs::read_to_string(&label_path).unwrap(), "0 0.500000 0.500000 0.500000 0.500000");
    }

    #[tokio::test]
    async fn labels_overwrite_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        storage.initialize().await.unwrap();
        let first = LabelFile::new("img1.png", vec![LabelRecord::new(0, 0.5, 0.5, 0.25, 0.25), LabelRecord::new(1, 0.1, 0.1, 0.1, 0.1)]);
        storage.save_labels(&first).await.unwrap();
        let second = LabelFile::new("img1.jpg", vec![LabelRecord::new(2, 0.3, 0.3, 0.3, 0.3)]);
        let path = storage.save_labels(&second).await.unwrap();
        assert_eq!(path, storage.label_directory().join("img1.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2 0.300000 0.300000 0.300000 0.300000");
    }
}
