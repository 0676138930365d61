//! Shared test fixtures for the finlit SDK integration tests.
//!
//! Provides a one-shot HTTP stub (`StubServer`) for the advisor and news
//! endpoints, a URL that refuses connections, and SDK constructors.

#![allow(dead_code)]

use finlit_sdk::FinlitSdk;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Serves exactly one HTTP request with a canned status and JSON body.
///
/// The raw request (request line, headers, body) is returned from
/// [`received`](StubServer::received) for assertions.
pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl StubServer {
    pub fn respond_once(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.to_string();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = v.trim().parse().unwrap();
                }
                head.push_str(&line);
            }
            let mut req_body = vec![0u8; content_length];
            reader.read_exact(&mut req_body).unwrap();

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            format!("{}\r\n{}", head, String::from_utf8_lossy(&req_body))
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    /// Wait for the request to be served and return it.
    pub fn received(self) -> String {
        self.handle.join().unwrap()
    }
}

/// A base URL on a port that nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// SDK pointed at `base_url` with a short timeout.
pub fn sdk_for(base_url: &str) -> FinlitSdk {
    FinlitSdk::builder()
        .api_base(base_url)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

pub fn offline_sdk() -> FinlitSdk {
    FinlitSdk::builder().offline(true).build().unwrap()
}

/// JSON body of a raw request captured by [`StubServer::received`].
pub fn request_body(raw: &str) -> serde_json::Value {
    let body = raw.split("\r\n\r\n").nth(1).unwrap_or_default();
    serde_json::from_str(body).unwrap()
}

/// Request line of a raw request, e.g. `POST /api/chat HTTP/1.1`.
pub fn request_line(raw: &str) -> &str {
    raw.lines().next().unwrap_or_default()
}
