// Connection handling module
// Serves each accepted TCP connection on its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Configures HTTP/1.1 connection settings (keep-alive, header read timeout)
/// 3. Serves the connection with the request handler
///
/// The timeout only covers waiting for request headers, so slow downloads
/// run to completion and idle keep-alive connections are closed quietly.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address, used for access logging
/// * `state` - Shared application state
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<AppState>,
) {
    let state = Arc::clone(state);

    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let performance = &state.config.performance;
        let header_timeout = (performance.header_read_timeout > 0)
            .then(|| Duration::from_secs(performance.header_read_timeout));

        let mut builder = http1::Builder::new();
        builder
            .keep_alive(performance.keep_alive)
            .timer(TokioTimer::new())
            .header_read_timeout(header_timeout);

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&service_state), peer_addr)),
        );

        if let Err(err) = conn.await {
            // Header read timeouts are how idle keep-alive connections end
            if !err.is_timeout() {
                logger::log_connection_error(&err);
            }
        }
    });
}
