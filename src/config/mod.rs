// Configuration module entry point
// Loads layered configuration and holds the shared application state

mod state;
mod types;

use std::net::{IpAddr, SocketAddr};

// Re-export public types
pub use state::AppState;
pub use types::{Config, PathPolicy, SiteConfig};

/// Configuration file looked up in the working directory (extension optional)
pub const DEFAULT_CONFIG_FILE: &str = "quiz-server";

impl Config {
    /// Load configuration from the default file name
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, lowest priority first: built-in defaults, the optional file,
    /// then `QUIZ_`-prefixed environment variables (`QUIZ_SERVER__PORT=8080`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with(config_path, environment())
    }

    /// Load configuration with an explicit environment source
    fn load_with(
        config_path: &str,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", types::DEFAULT_HOST)?
            .set_default("server.port", i64::from(types::DEFAULT_PORT))?
            .set_default("site.default_document", types::DEFAULT_DOCUMENT)?
            .set_default("site.audio_dir", types::DEFAULT_AUDIO_DIR)?
            .set_default("site.audio_extension", types::DEFAULT_AUDIO_EXTENSION)?
            .set_default("site.path_policy", PathPolicy::Confine.as_str())?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", types::DEFAULT_ACCESS_LOG_FORMAT)?
            .set_default("performance.keep_alive", true)?
            .set_default(
                "performance.header_read_timeout",
                i64::from(types::DEFAULT_HEADER_READ_TIMEOUT),
            )?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(env)
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|e| format!("Invalid address '{}': {e}", self.server.host))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

/// `QUIZ_`-prefixed variables, `__` between nesting levels
fn environment() -> config::Environment {
    config::Environment::with_prefix("QUIZ")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
