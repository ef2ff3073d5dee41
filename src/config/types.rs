// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DOCUMENT: &str = "index.html";
pub const DEFAULT_AUDIO_DIR: &str = "audio";
pub const DEFAULT_AUDIO_EXTENSION: &str = "wav";
pub const DEFAULT_ACCESS_LOG_FORMAT: &str = "quiz";
pub const DEFAULT_HEADER_READ_TIMEOUT: u32 = 30;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

/// Served directory layout
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory to serve (current working directory if not set)
    #[serde(default)]
    pub root: Option<String>,
    /// Document served for `/`
    pub default_document: String,
    /// Subdirectory inspected at startup for audio assets
    pub audio_dir: String,
    /// Extension (without dot) counted as an audio asset at startup
    pub audio_extension: String,
    pub path_policy: PathPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: None,
            default_document: DEFAULT_DOCUMENT.to_string(),
            audio_dir: DEFAULT_AUDIO_DIR.to_string(),
            audio_extension: DEFAULT_AUDIO_EXTENSION.to_string(),
            path_policy: PathPolicy::default(),
        }
    }
}

/// How request paths are allowed to map onto the filesystem
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathPolicy {
    /// Resolved files must stay under the canonical root; `..` and symlink
    /// escapes are answered with 404
    #[default]
    Confine,
    /// The request path is joined onto the root as-is
    Unrestricted,
}

impl PathPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confine => "confine",
            Self::Unrestricted => "unrestricted",
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (quiz, common, combined, json)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            access_log: true,
            access_log_format: DEFAULT_ACCESS_LOG_FORMAT.to_string(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Seconds allowed for a request's headers to arrive; 0 disables it.
    /// Does not limit how long a response takes to send.
    pub header_read_timeout: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            keep_alive: true,
            header_read_timeout: u64::from(DEFAULT_HEADER_READ_TIMEOUT),
        }
    }
}
