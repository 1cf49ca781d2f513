//! HTTP transport backed by reqwest's blocking client
//!
//! The client is owned by the transport value: it is built once per run and
//! its connection pool is released when the transport is dropped.

use crate::core::traits::{Header, Transport};
use crate::types::SyncError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// Blocking HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport, optionally with a per-request timeout
    ///
    /// Without a timeout reqwest's default applies.
    pub fn new(timeout: Option<Duration>) -> Result<Self, SyncError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SyncError::transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

fn header_map(headers: &[Header]) -> Result<HeaderMap, SyncError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| SyncError::transport(format!("invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| SyncError::transport(format!("invalid value for header {name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

impl Transport for HttpTransport {
    /// POST the body; transport failures and non-success statuses are errors
    fn post(&self, url: &str, headers: &[Header], body: &str) -> Result<(), SyncError> {
        let response = self
            .client
            .post(url)
            .headers(header_map(headers)?)
            .body(body.to_string())
            .send()
            .map_err(|e| SyncError::transport(format!("POST {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::transport(format!(
                "POST {url} returned {status}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_header_map_builds_headers() {
        let headers = vec![
            ("content-type", "application/json".to_string()),
            ("authorization", "Token abc".to_string()),
        ];

        let map = header_map(&headers).unwrap();
        assert_eq!(map["content-type"], "application/json");
        assert_eq!(map["authorization"], "Token abc");
    }

    #[test]
    fn test_header_map_rejects_invalid_value() {
        let headers = vec![("authorization", "Token a\nb".to_string())];
        assert!(matches!(
            header_map(&headers),
            Err(SyncError::Transport { .. })
        ));
    }

    /// Serve exactly one request on a free local port
    ///
    /// Answers with `status_line` and hands back the raw request text.
    fn serve_once(status_line: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/import", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];

            let header_end = loop {
                let n = stream.read(&mut buf).unwrap();
                assert!(n > 0, "connection closed before headers were complete");
                request.extend_from_slice(&buf[..n]);
                if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&request[..header_end]).to_ascii_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|len| len.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            while request.len() < header_end + content_length {
                let n = stream.read(&mut buf).unwrap();
                assert!(n > 0, "connection closed before body was complete");
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8(request).unwrap()
        });

        (url, handle)
    }

    fn ledger_headers() -> Vec<Header> {
        vec![
            ("content-type", "application/json".to_string()),
            ("authorization", "Token secret".to_string()),
            ("accept-charset", "utf-8".to_string()),
        ]
    }

    #[test]
    fn test_post_success_sends_configured_headers_and_body() {
        let (url, server) = serve_once("201 Created");
        let transport = HttpTransport::new(Some(Duration::from_secs(5))).unwrap();
        let body = r#"{"event":"conf2024","transactions":[]}"#;

        let result = transport.post(&url, &ledger_headers(), body);
        let request = server.join().unwrap();

        assert_eq!(result, Ok(()));
        let lowered = request.to_ascii_lowercase();
        assert!(lowered.starts_with("post /import http/1.1\r\n"));
        assert!(lowered.contains("\r\ncontent-type: application/json\r\n"));
        assert!(lowered.contains("\r\naccept-charset: utf-8\r\n"));
        assert!(lowered.contains("\r\nauthorization: token secret\r\n"));
        assert!(request.contains("Token secret"));
        assert!(request.ends_with(body));
    }

    #[rstest]
    #[case::server_error("500 Internal Server Error", "returned 500")]
    #[case::unauthorized("401 Unauthorized", "returned 401")]
    #[case::not_found("404 Not Found", "returned 404")]
    fn test_post_non_success_status_is_transport_error(
        #[case] status_line: &'static str,
        #[case] code: &str,
    ) {
        let (url, server) = serve_once(status_line);
        let transport = HttpTransport::new(Some(Duration::from_secs(5))).unwrap();

        let result = transport.post(&url, &ledger_headers(), "{}");
        server.join().unwrap();

        match result {
            Err(SyncError::Transport { message }) => {
                assert!(message.contains(code), "unexpected message: {message}");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn test_post_reports_connection_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/import", listener.local_addr().unwrap());
        drop(listener);
        let transport = HttpTransport::new(Some(Duration::from_secs(2))).unwrap();

        let result = transport.post(&url, &[], "{}");
        assert!(matches!(result, Err(SyncError::Transport { .. })));
    }

    #[test]
    fn test_post_rejects_malformed_url() {
        let transport = HttpTransport::new(None).unwrap();
        let result = transport.post("not a url", &[], "{}");
        assert!(matches!(result, Err(SyncError::Transport { .. })));
    }
}
