use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IOEntry {
    #[error("Failed to create directory {0}: {1}")]
    CreateDirectoryError(String, IoError),
    #[error("Failed to create file {0}: {1}")]
    CreateFileError(String, IoError),
    #[error("Failed to read file {0}: {1}")]
    ReadFileError(String, IoError),
    #[error("Failed to write file {0}: {1}")]
    WriteFileError(String, IoError),
    #[error("Failed to move file {0} to {1}: {2}")]
    MoveFileError(String, String, IoError),
    #[error("Failed to receive file {0}: {1}")]
    ReceiveStreamError(String, String),
}

impl IOEntry {
    /// Whether the failure came from the data the client sent rather than the local disk.
    pub fn is_client_error(&self) -> bool {
        matches!(self, IOEntry::ReceiveStreamError(_, _))
    }
}

impl From<IOEntry> for String {
    #[inline(always)]
    fn from(value: IOEntry) -> Self {
        value.to_string()
    }
}
