//! Startup inspection of the served directory
//!
//! Purely informational: the result is logged for the operator and never
//! changes how requests are handled.

use std::fs;
use std::path::Path;

use crate::config::SiteConfig;

/// What the server found in its root directory at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub default_document: String,
    pub default_document_found: bool,
    pub audio_dir: String,
    pub audio_extension: String,
    /// Number of audio files, or `None` when the audio directory is missing
    pub audio_files: Option<usize>,
}

/// Inspect `root` for the default document and audio assets
pub fn inspect(root: &Path, site: &SiteConfig) -> SiteReport {
    SiteReport {
        default_document: site.default_document.clone(),
        default_document_found: root.join(&site.default_document).is_file(),
        audio_dir: site.audio_dir.clone(),
        audio_extension: site.audio_extension.clone(),
        audio_files: count_audio_files(&root.join(&site.audio_dir), &site.audio_extension),
    }
}

/// Count directory entries whose name ends in `.<extension>`
fn count_audio_files(dir: &Path, extension: &str) -> Option<usize> {
    let entries = fs::read_dir(dir).ok()?;
    let suffix = format!(".{extension}");
    let count = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(&suffix))
        .count();
    Some(count)
}
