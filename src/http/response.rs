//! HTTP response building module
//!
//! Provides builders for the status codes the asset server emits. CORS
//! headers are not added here; see [`super::cors`].

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::ALLOW;
use hyper::Response;

/// Methods answered by the server, advertised on OPTIONS
pub const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Build 200 response carrying a file's bytes
///
/// `Content-Length` always reflects the file size, even when the body is
/// dropped for HEAD.
pub fn build_file_response(data: Bytes, content_type: &str, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response naming the resolved path
pub fn build_404_response(path: &str, is_head: bool) -> Response<Full<Bytes>> {
    build_text_response(404, format!("File not found: {path}"), is_head)
}

/// Build 500 Internal Server Error response
pub fn build_500_response(is_head: bool) -> Response<Full<Bytes>> {
    build_text_response(500, "500 Internal Server Error".to_string(), is_head)
}

/// Build 501 Not Implemented response for methods the server does not handle
pub fn build_501_response(method: &str) -> Response<Full<Bytes>> {
    let mut response = build_text_response(501, format!("Unsupported method ({method})"), false);
    if let Ok(allow) = ALLOWED_METHODS.parse() {
        response.headers_mut().insert(ALLOW, allow);
    }
    response
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", ALLOWED_METHODS)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build plain-text response with the given status
fn build_text_response(status: u16, message: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = message.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(message)
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_404_names_path() {
        let response = build_404_response("missing.txt", false);
        assert_eq!(response.status(), 404);
        assert_eq!(
            response.headers()["Content-Type"],
            "text/plain; charset=utf-8"
        );
        assert!(body_string(response).await.contains("missing.txt"));
    }

    #[tokio::test]
    async fn test_head_keeps_length_drops_body() {
        let response = build_file_response(Bytes::from_static(b"abcdef"), "text/plain", true);
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Length"], "6");
        assert!(body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_501_mentions_method() {
        let response = build_501_response("POST");
        assert_eq!(response.status(), 501);
        assert_eq!(response.headers()["Allow"], ALLOWED_METHODS);
        assert_eq!(body_string(response).await, "Unsupported method (POST)");
    }

    #[test]
    fn test_options_is_empty_204() {
        let response = build_options_response();
        assert_eq!(response.status(), 204);
        assert_eq!(response.headers()["Allow"], ALLOWED_METHODS);
    }
}
