use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use crate::utils::logging::*;

pub const CONFIG_PATH: &str = "./labeler.toml";

#[derive(Debug, Deserialize, Serialize)]
struct ConfigTable {
    #[serde(rename = "Config")]
    config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub http_server_bind_address: String, //address
    pub http_server_bind_port: u16, //port
    pub bind_retry_duration: u64, //seconds
    pub upload_directory: PathBuf, //path
    pub label_directory: PathBuf, //path
    pub label_payload_limit: usize, //bytes
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_server_bind_address: "127.0.0.1".to_string(),
            http_server_bind_port: 5000,
            bind_retry_duration: 5,
            upload_directory: PathBuf::from("uploads"),
            label_directory: PathBuf::from("labels"),
            label_payload_limit: 2 * 1024 * 1024,
        }
    }
}

impl Config {
    /// A missing file falls back to the defaults, anything else unreadable is fatal.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Config, LogEntry> {
        let path = path.as_ref();
        let toml_string = match fs::read_to_string(path).await {
            Ok(toml_string) => toml_string,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                logging_warning!(SystemEntry::ConfigNotFound, format!("Path: {}", path.display()));
                return Ok(Config::default());
            },
            Err(err) => return Err(emergency_entry!(IOEntry::ReadFileError(path.display().to_string(), err))),
        };
        let config = Self::parse(&toml_string)?;
        if !Self::validate(&config) {
            return Err(emergency_entry!(SystemEntry::InvalidConfig));
        }
        Ok(config)
    }

    pub fn parse(toml_string: &str) -> Result<Config, LogEntry> {
        toml::from_str::<ConfigTable>(toml_string)
            .map(|config_table| config_table.config)
            .map_err(|err| emergency_entry!(SystemEntry::ConfigParseError(err)))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_server_bind_address, self.http_server_bind_port)
    }

    pub fn validate(config: &Config) -> bool {
        Config::validate_port(config.http_server_bind_port)
            && Config::validate_second(config.bind_retry_duration)
            && Config::validate_directories(&config.upload_directory, &config.label_directory)
            && Config::validate_payload_limit(config.label_payload_limit)
    }

    fn validate_port(port: u16) -> bool {
        port != 0
    }

    fn validate_second(second: u64) -> bool {
        second <= 3600
    }

    fn validate_directories(upload_directory: &Path, label_directory: &Path) -> bool {
        !upload_directory.as_os_str().is_empty()
            && !label_directory.as_os_str().is_empty()
            && upload_directory != label_directory
    }

    fn validate_payload_limit(limit: usize) -> bool {
        limit > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
        [Config]
        http_server_bind_address = "0.0.0.0"
        http_server_bind_port = 8080
        bind_retry_duration = 10
        upload_directory = "data/uploads"
        label_directory = "data/labels"
        label_payload_limit = 65536
    "#;

    #[test]
    fn parses_config_table() {
        let config = Config::parse(SAMPLE).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.upload_directory, PathBuf::from("data/uploads"));
        assert_eq!(config.label_payload_limit, 65536);
        assert!(Config::validate(&config));
    }

    #[test]
    fn rejects_missing_table() {
        assert!(Config::parse("http_server_bind_port = 8080").is_err());
    }

    #[test]
    fn default_is_valid() {
        assert!(Config::validate(&Config::default()));
    }

    #[test]
    fn shared_directory_is_invalid() {
        let config = Config {
            label_directory: PathBuf::from("uploads"),
            ..Config::default()
        };
        assert!(!Config::validate(&config));
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path().join("labeler.toml")).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn invalid_values_are_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labeler.toml");
        std::fs::write(&path, SAMPLE.replace("bind_retry_duration = 10", "bind_retry_duration = 7200")).unwrap();
        let entry = Config::load(&path).await.unwrap_err();
        assert_eq!(entry.level, LogLevel::Emergency);
    }
}
