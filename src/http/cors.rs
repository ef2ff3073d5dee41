//! CORS header decoration
//!
//! The quiz page may be opened from another origin (file:// or a dev server),
//! so every response, error pages included, carries permissive CORS headers.

use hyper::header::{HeaderName, HeaderValue};
use hyper::Response;

/// Headers appended to every response
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type"),
];

/// Append the CORS headers to a response, whatever its status
pub fn apply_cors_headers<B>(response: &mut Response<B>) {
    let headers = response.headers_mut();
    for (name, value) in CORS_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_added_to_error_response() {
        let mut response = Response::builder().status(404).body(()).unwrap();
        apply_cors_headers(&mut response);

        let headers = response.headers();
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
    }

    #[test]
    fn test_existing_values_replaced_not_duplicated() {
        let mut response = Response::builder()
            .header("Access-Control-Allow-Origin", "https://example.com")
            .body(())
            .unwrap();
        apply_cors_headers(&mut response);
        apply_cors_headers(&mut response);

        let origins: Vec<_> = response
            .headers()
            .get_all("Access-Control-Allow-Origin")
            .iter()
            .collect();
        assert_eq!(origins, vec!["*"]);
    }
}
