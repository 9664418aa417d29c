//! Shared test helpers: a minimal in-process upstream serving canned
//! HTTP responses and recording every request it receives.

use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

pub struct MockUpstream {
    pub addr: SocketAddr,
    /// Raw request text (request line, headers, body), one entry per request
    pub requests: mpsc::UnboundedReceiver<String>,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Spawn a loopback upstream that answers every request with the given
/// status line and body.
pub async fn spawn_upstream(status_line: &'static str, body: &'static str) -> MockUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let tx = tx.clone();

            tokio::spawn(async move {
                let raw = read_request(&mut stream).await;
                let _ = tx.send(raw);

                let response = format!(
                    "HTTP/1.1 {status_line}\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    MockUpstream { addr, requests: rx }
}

/// Read one HTTP request: headers, then as many body bytes as Content-Length
/// announces.
async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf = vec![0u8; 64 * 1024];
    let mut total = 0;

    loop {
        if total == buf.len() {
            break;
        }
        let n = stream.read(&mut buf[total..]).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        total += n;

        let text = String::from_utf8_lossy(&buf[..total]);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text
                .lines()
                .find_map(|line| {
                    line.to_ascii_lowercase()
                        .strip_prefix("content-length:")
                        .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                })
                .unwrap_or(0);

            if total >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf[..total]).to_string()
}
