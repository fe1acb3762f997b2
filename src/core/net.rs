// src/core/net.rs

// Blocking HTTP GET. One attempt per page, no retries.

use reqwest::blocking::{Client, ClientBuilder};

use crate::config::CollectOptions;
use crate::error::FetchError;

/// Source of listing pages. The collector only ever asks for a body by URL,
/// so tests can serve fixtures without a network.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Client with the fixed browser-like User-Agent and request timeout.
    pub fn new(opts: &CollectOptions) -> Result<Self, reqwest::Error> {
        Ok(Self { client: Self::client_builder(opts).build()? })
    }

    /// The settings `new` applies, open for further tweaks before `build`.
    pub fn client_builder(opts: &CollectOptions) -> ClientBuilder {
        Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
    }

    /// Wrap a pre-configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport { url: url.to_string(), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }
        resp.text().map_err(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};
    use std::time::Duration;

    use crate::config::consts::USER_AGENT;

    /// Serve exactly one canned HTTP/1.0 response on a loopback port. The
    /// handle yields the request head the server received.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let Ok((mut s, _)) = listener.accept() else { return s!() };
            let head = read_head(&mut s);
            let resp = format!(
                "{status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = s.write_all(resp.as_bytes());
            head
        });
        (format!("http://{addr}/page-1.html"), handle)
    }

    fn read_head(s: &mut impl Read) -> String {
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            match s.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => head.extend_from_slice(&buf[..n]),
            }
        }
        String::from_utf8_lossy(&head).into_owned()
    }

    /// Configured like `HttpFetcher::new`, minus any ambient proxy settings.
    fn fetcher_with(opts: &CollectOptions) -> HttpFetcher {
        HttpFetcher::with_client(HttpFetcher::client_builder(opts).no_proxy().build().unwrap())
    }

    fn fetcher() -> HttpFetcher {
        fetcher_with(&CollectOptions { timeout: Duration::from_secs(5), ..CollectOptions::default() })
    }

    #[test]
    fn builds_from_default_options() {
        assert!(HttpFetcher::new(&CollectOptions::default()).is_ok());
    }

    #[test]
    fn default_request_settings() {
        let opts = CollectOptions::default();
        assert_eq!(opts.user_agent, "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36");
        assert_eq!(opts.timeout, Duration::from_secs(10));
        assert_eq!(opts.pause, Duration::from_secs(1));
    }

    #[test]
    fn sends_browser_user_agent() {
        let (url, server) = serve_once("HTTP/1.0 200 OK", "ok");
        fetcher_with(&CollectOptions::default()).fetch(&url).unwrap();

        let head = server.join().unwrap();
        let ua = head
            .lines()
            .find_map(|l| l.strip_prefix("user-agent: ").or_else(|| l.strip_prefix("User-Agent: ")))
            .unwrap_or_else(|| panic!("no User-Agent in {head:?}"));
        assert_eq!(ua, USER_AGENT);
        assert!(head.starts_with("GET /page-1.html HTTP/1.1"), "{head}");
    }

    #[test]
    fn slow_server_hits_the_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/page-1.html", listener.local_addr().unwrap());
        thread::spawn(move || {
            // Accept and hold the connection without answering.
            if let Ok((s, _)) = listener.accept() {
                thread::sleep(Duration::from_secs(3));
                drop(s);
            }
        });

        let f = fetcher_with(&CollectOptions { timeout: Duration::from_millis(200), ..CollectOptions::default() });
        match f.fetch(&url) {
            Err(FetchError::Transport { source, .. }) => assert!(source.is_timeout(), "{source}"),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn ok_response_returns_body() {
        let (url, _) = serve_once("HTTP/1.0 200 OK", "<html>hi</html>");
        assert_eq!(fetcher().fetch(&url).unwrap(), "<html>hi</html>");
    }

    #[test]
    fn non_2xx_is_status_error() {
        let (url, _) = serve_once("HTTP/1.0 404 Not Found", "nope");
        match fetcher().fetch(&url) {
            Err(FetchError::Status { status, url: u }) => {
                assert_eq!(status, 404);
                assert_eq!(u, url);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn refused_connection_is_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}/page-1.html");
        assert!(matches!(fetcher().fetch(&url), Err(FetchError::Transport { .. })));
    }
}
