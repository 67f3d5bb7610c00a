//! In-process fake HTTP feed server for integration testing
//!
//! Speaks just enough HTTP/1.1 to serve the pipeline's single GET:
//! read the request head, check the `Authorization` header against the
//! configured credentials, and answer with the feed body (200), a 401,
//! or a fixed status for failure-path tests. Every response closes the
//! connection.

use super::feed::ServedFeed;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// A fake feed server on localhost with an OS-assigned port.
pub struct FakeFeedServer {
    port: u16,
    /// Handle to the background task so it lives as long as the server.
    _handle: tokio::task::JoinHandle<()>,
}

impl FakeFeedServer {
    /// Start a server that requires the feed's credentials.
    ///
    /// A request carrying `Basic base64(username:password)` gets the
    /// feed body with 200; anything else gets 401.
    pub async fn start(feed: ServedFeed) -> Self {
        let expected = format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", feed.username, feed.password))
        );
        Self::serve(move |auth| {
            if auth.as_deref() == Some(expected.as_str()) {
                (200, feed.body.clone())
            } else {
                (401, String::new())
            }
        })
        .await
    }

    /// Start a server that answers every request with a fixed status
    /// and body, ignoring credentials.
    pub async fn start_with_status(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::serve(move |_| (status, body.clone())).await
    }

    async fn serve<F>(respond: F) -> Self
    where
        F: Fn(Option<String>) -> (u16, String) + Send + Sync + 'static,
    {
        // Bind to any available port on localhost.
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind to ephemeral port");
        let port = listener.local_addr().unwrap().port();

        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let auth = read_authorization(&mut stream).await;
                let (status, body) = respond(auth);
                write_response(stream, status, &body).await;
            }
        });

        Self {
            port,
            _handle: handle,
        }
    }

    /// Feed URL clients should point at.
    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}/mail/feed/atom", self.port)
    }
}

/// Read the request head and return the `Authorization` header value,
/// if present.
async fn read_authorization(stream: &mut TcpStream) -> Option<String> {
    let mut reader = BufReader::new(stream);
    let mut authorization = None;

    loop {
        let mut line = String::new();
        let n = reader.read_line(&mut line).await.ok()?;
        let line = line.trim_end_matches(['\r', '\n']);
        // Blank line ends the request head.
        if n == 0 || line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            if key.eq_ignore_ascii_case("authorization") {
                authorization = Some(value.trim().to_string());
            }
        }
    }

    authorization
}

async fn write_response(mut stream: TcpStream, status: u16, body: &str) {
    let reason = match status {
        200 => "OK",
        401 => "Unauthorized",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\n\
         Content-Type: text/xml; charset=UTF-8\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {body}",
        body.len(),
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
