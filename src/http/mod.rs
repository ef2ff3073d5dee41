//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from
//! filesystem lookup: MIME detection, CORS decoration, and response builders.

pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used functions
pub use cors::apply_cors_headers;
pub use response::{
    build_404_response, build_500_response, build_501_response, build_file_response,
    build_options_response,
};
