//! Logger module
//!
//! Provides logging utilities for the asset server including:
//! - Server lifecycle logging
//! - Startup site diagnostics
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::AppState;
use crate::site::SiteReport;
use std::net::SocketAddr;

/// Prefix carried by every request log line in the default format
pub const LOG_PREFIX: &str = "[Quiz Server]";

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &crate::config::Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, state: &AppState) {
    let config = &state.config;
    write_info("======================================");
    write_info("Quiz game server starting");
    write_info(&format!("Server running at http://{addr}"));
    write_info(&format!(
        "Access the quiz at http://localhost:{}",
        addr.port()
    ));
    write_info(&format!("Serving files from: {}", state.root.display()));
    write_info(&format!("Path policy: {}", config.site.path_policy.as_str()));
    match config.server.workers {
        Some(workers) => write_info(&format!("Worker threads: {workers}")),
        None => write_info("Worker threads: CPU cores"),
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================");
}

pub fn log_site_report(report: &SiteReport) {
    if !report.default_document_found {
        log_warning(&format!(
            "Required file '{}' not found!",
            report.default_document
        ));
    }
    match report.audio_files {
        Some(count) => write_info(&format!(
            "[Site] Found {count} audio files (*.{}) in {}/",
            report.audio_extension, report.audio_dir
        )),
        None => log_warning(&format!(
            "Audio directory '{}' not found. Audio features may not work.",
            report.audio_dir
        )),
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_signal(name: &str) {
    write_info(&format!("\n[SIGNAL] {name} received, shutting down"));
}

pub fn log_shutdown() {
    write_info("Server stopped by user");
}

pub fn log_fatal(err: &dyn std::error::Error) {
    write_error(&format!("[FATAL] Server error: {err}"));
}
