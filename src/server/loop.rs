// Server loop module
// Accepts connections until shutdown is signalled

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections on `listener` until `shutdown` is notified.
///
/// The listener is dropped on return, closing the socket. Connections
/// already handed to their tasks are left to finish on their own.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = shutdown.notified() => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_listener;
    use std::fs;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn test_serves_over_tcp_until_shutdown() {
        let site = tempfile::tempdir().unwrap();
        fs::write(site.path().join("index.html"), "<html>OK</html>").unwrap();

        let state = Arc::new(AppState::with_root(Config::default(), site.path()));
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());
        let server = tokio::spawn(start_server_loop(listener, state, Arc::clone(&shutdown)));

        let response = raw_request(
            addr,
            "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"), "{response}");
        assert!(response.contains("access-control-allow-origin: *\r\n"));
        assert!(response.contains("content-type: text/html; charset=utf-8\r\n"));
        assert!(response.ends_with("\r\n\r\n<html>OK</html>"));

        let response = raw_request(
            addr,
            "GET /missing.txt HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"), "{response}");
        assert!(response.contains("access-control-allow-origin: *\r\n"));
        assert!(response.ends_with("File not found: missing.txt"));

        shutdown.notify_one();
        server.await.unwrap();
        assert!(TcpStream::connect(addr).await.is_err());
    }

    #[tokio::test]
    async fn test_slow_download_outlives_header_timeout() {
        const SIZE: usize = 8 * 1024 * 1024;

        let site = tempfile::tempdir().unwrap();
        let content: Vec<u8> = (0..SIZE).map(|i| (i % 251) as u8).collect();
        fs::write(site.path().join("big.wav"), &content).unwrap();

        let mut config = Config::default();
        config.performance.header_read_timeout = 1;
        config.logging.access_log = false;
        let state = Arc::new(AppState::with_root(config, site.path()));
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());
        let server = tokio::spawn(start_server_loop(listener, state, Arc::clone(&shutdown)));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /big.wav HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();

        // 64 KiB every 20 ms keeps the transfer going well past one second
        let mut received = Vec::with_capacity(SIZE + 1024);
        let mut chunk = vec![0u8; 64 * 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&chunk[..n]);
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }

        let split = received
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .unwrap();
        let head = String::from_utf8_lossy(&received[..split]);
        assert!(head.starts_with("HTTP/1.1 200 OK"), "{head}");
        assert!(head.contains("content-type: audio/wav"));
        let body = &received[split + 4..];
        assert_eq!(body.len(), SIZE);
        assert!(body == content.as_slice());

        shutdown.notify_one();
        server.await.unwrap();
    }
}
