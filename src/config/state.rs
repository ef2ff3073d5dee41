// Application state module
// Immutable state shared by every connection

use std::io;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Directory every request path is resolved against
    pub root: PathBuf,
}

impl AppState {
    /// Create `AppState`, resolving the root from `site.root` or the
    /// current working directory
    pub fn new(config: Config) -> io::Result<Self> {
        let root = match config.site.root.as_deref() {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()?,
        };
        Ok(Self::with_root(config, root))
    }

    /// Create `AppState` serving an explicit directory
    pub fn with_root(config: Config, root: impl AsRef<Path>) -> Self {
        Self {
            config,
            root: root.as_ref().to_path_buf(),
        }
    }
}
