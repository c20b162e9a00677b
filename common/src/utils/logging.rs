use chrono::{DateTime, Local};
use colored::*;
use std::fmt::Display;

pub use crate::{error_entry, emergency_entry};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Information,
    Notice,
    Warning,
    Error,
    Critical,
    Emergency,
}

impl LogLevel {
    fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug      ",
            LogLevel::Information => "Information",
            LogLevel::Notice => "Notice     ",
            LogLevel::Warning => "Warning    ",
            LogLevel::Error => "Error      ",
            LogLevel::Critical => "Critical   ",
            LogLevel::Emergency => "Emergency  ",
        }
    }

    pub fn to_plain_string(&self) -> String {
        self.label().to_string()
    }

    pub fn to_colored_string(&self) -> ColoredString {
        let label = self.label();
        match self {
            LogLevel::Debug => label.bright_black(),
            LogLevel::Information => label.bright_blue(),
            LogLevel::Notice => label.bright_green(),
            LogLevel::Warning => label.yellow(),
            LogLevel::Error => label.bright_red(),
            LogLevel::Critical => label.bright_yellow(),
            LogLevel::Emergency => label.magenta(),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<Local>,
    pub position: String,
    pub message: String,
    pub debug_info: String,
}

impl LogEntry {
    pub fn new<T: Into<String>, U: Into<String>, V: Into<String>>(level: LogLevel, position: T, message: U, debug_info: V) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            position: position.into(),
            message: message.into(),
            debug_info: debug_info.into(),
        }
    }

    pub fn to_plain_string(&self) -> String {
        let timestamp = self.timestamp.format("%Y/%m/%d %H:%M:%S");
        let head = format!("[{}] {} {}: {}", self.level.to_plain_string(), timestamp, self.position, self.message);
        if self.debug_info.is_empty() {
            head
        } else {
            format!("{}\n{}", head, self.debug_info)
        }
    }

    pub fn to_colored_string(&self) -> String {
        let timestamp = self.timestamp.format("%Y/%m/%d %H:%M:%S");
        let head = format!("[{}] {} {}: {}", self.level.to_colored_string(), timestamp, self.position.cyan(), self.message.white());
        if self.debug_info.is_empty() {
            head
        } else {
            format!("{}\n{}", head, self.debug_info.bright_black())
        }
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}

#[macro_export]
macro_rules! error_entry {
    ($message:expr) => {
        $crate::utils::logging::LogEntry::new($crate::utils::logging::LogLevel::Error, format!("{}:{}", file!(), line!()), $message, "")
    };
    ($message:expr, $debug_info:expr) => {
        $crate::utils::logging::LogEntry::new($crate::utils::logging::LogLevel::Error, format!("{}:{}", file!(), line!()), $message, $debug_info)
    };
}

#[macro_export]
macro_rules! emergency_entry {
    ($message:expr) => {
        $crate::utils::logging::LogEntry::new($crate::utils::logging::LogLevel::Emergency, format!("{}:{}", file!(), line!()), $message, "")
    };
    ($message:expr, $debug_info:expr) => {
        $crate::utils::logging::LogEntry::new($crate::utils::logging::LogLevel::Emergency, format!("{}:{}", file!(), line!()), $message, $debug_info)
    };
}
