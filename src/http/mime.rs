//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.
//! Audio formats used by the quiz (`wav`, `mp3`) are always mapped explicitly
//! so browsers get playable types regardless of platform MIME databases.

use std::path::Path;

const FALLBACK: &str = "application/octet-stream";

/// Get MIME Content-Type based on file extension (case-insensitive)
///
/// # Examples
/// ```ignore
/// assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(get_content_type(Some("WAV")), "audio/wav");
/// assert_eq!(get_content_type(None), "application/octet-stream");
/// ```
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    let Some(ext) = extension else {
        return FALLBACK;
    };
    lookup(&ext.to_ascii_lowercase())
}

/// Content-Type for a file path
pub fn content_type_for(path: &Path) -> &'static str {
    get_content_type(path.extension().and_then(|e| e.to_str()))
}

fn lookup(ext: &str) -> &'static str {
    match ext {
        // Text
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "txt" | "md" => "text/plain; charset=utf-8",
        "csv" => "text/csv; charset=utf-8",
        "xml" => "application/xml",

        // JavaScript/WASM
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "json" | "map" => "application/json",
        "webmanifest" => "application/manifest+json",
        "wasm" => "application/wasm",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",

        // Audio
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "ogg" | "oga" => "audio/ogg",
        "m4a" => "audio/mp4",
        "flac" => "audio/flac",
        "aac" => "audio/aac",

        // Video
        "mp4" => "video/mp4",
        "webm" => "video/webm",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Documents
        "pdf" => "application/pdf",
        "zip" => "application/zip",

        _ => FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_overrides() {
        assert_eq!(get_content_type(Some("wav")), "audio/wav");
        assert_eq!(get_content_type(Some("mp3")), "audio/mpeg");
        assert_eq!(
            content_type_for(Path::new("audio/sample.wav")),
            "audio/wav"
        );
        assert_eq!(
            content_type_for(Path::new("audio/sample.mp3")),
            "audio/mpeg"
        );
    }

    #[test]
    fn test_game_assets() {
        assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(get_content_type(Some("css")), "text/css; charset=utf-8");
        assert_eq!(
            get_content_type(Some("js")),
            "text/javascript; charset=utf-8"
        );
        assert_eq!(get_content_type(Some("png")), "image/png");
    }

    #[test]
    fn test_extension_case_is_ignored() {
        assert_eq!(get_content_type(Some("MP3")), "audio/mpeg");
        assert_eq!(content_type_for(Path::new("INDEX.HTML")), "text/html; charset=utf-8");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(get_content_type(None), "application/octet-stream");
        assert_eq!(content_type_for(Path::new("Makefile")), "application/octet-stream");
    }
}
