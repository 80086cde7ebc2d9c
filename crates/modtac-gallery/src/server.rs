//! Minimal HTTP/1.1 server exposing the gallery listing.
//!
//! One request per connection, `Connection: close`. Only `GET /api/gallery`
//! is routed; everything else is answered with a JSON error.

use async_trait::async_trait;
use modtac_core::{ModtacError, ModtacResult, Source};
use serde_json::json;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::listing::list_or_empty;

pub const GALLERY_ROUTE: &str = "/api/gallery";
const MAX_HEAD_BYTES: usize = 8 * 1024;
/// How long a client may take to send its request head.
pub const DEFAULT_HEAD_TIMEOUT: Duration = Duration::from_secs(5);
/// Pause after a failed `accept`, e.g. while file descriptors are exhausted.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    pub method: String,
    pub path: String,
}

impl RequestHead {
    /// Parses the request line of a raw request head.
    pub fn parse(raw: &str) -> ModtacResult<Self> {
        let line = raw.lines().next().unwrap_or_default();
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(method), Some(target), Some(version)) if version.starts_with("HTTP/") => {
                let path = target.split(['?', '#']).next().unwrap_or(target);
                Ok(Self {
                    method: method.to_string(),
                    path: path.to_string(),
                })
            }
            _ => Err(ModtacError::Validation(format!(
                "malformed request line: {line:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub reason: &'static str,
    pub body: String,
    pub allow: Option<&'static str>,
}

impl Response {
    fn json(status: u16, reason: &'static str, body: serde_json::Value) -> Self {
        Self {
            status,
            reason,
            body: body.to_string(),
            allow: None,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nCache-Control: no-store\r\nConnection: close\r\n",
            self.status,
            self.reason,
            self.body.len()
        );
        if let Some(allow) = self.allow {
            head.push_str(&format!("Allow: {allow}\r\n"));
        }
        head.push_str("\r\n");
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(self.body.as_bytes());
        bytes
    }
}

/// Routes a parsed request.
pub async fn respond<S>(source: &S, request: &RequestHead) -> Response
where
    S: Source<String> + ?Sized,
{
    if request.path != GALLERY_ROUTE {
        return Response::json(404, "Not Found", json!({ "error": "not found" }));
    }
    if request.method != "GET" {
        return Response {
            allow: Some("GET"),
            ..Response::json(
                405,
                "Method Not Allowed",
                json!({ "error": "method not allowed" }),
            )
        };
    }

    let listing = list_or_empty(source).await;
    match serde_json::to_value(&listing).map_err(|e| ModtacError::Serialization(e.to_string())) {
        Ok(body) => Response::json(200, "OK", body),
        Err(e) => {
            tracing::warn!("Failed to encode gallery listing: {}", e);
            Response::json(200, "OK", json!({ "images": [] }))
        }
    }
}

async fn read_head(stream: &mut TcpStream) -> ModtacResult<String> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
        if buf.len() > MAX_HEAD_BYTES {
            return Err(ModtacError::Validation("request head too large".to_string()));
        }
    }
    String::from_utf8(buf).map_err(|e| ModtacError::Validation(e.to_string()))
}

async fn handle_connection<S>(
    mut stream: TcpStream,
    source: Arc<S>,
    head_timeout: Duration,
) -> ModtacResult<()>
where
    S: Source<String> + ?Sized,
{
    let response = match tokio::time::timeout(head_timeout, read_head(&mut stream)).await {
        Err(_) => {
            tracing::debug!("No request head within {:?}, closing", head_timeout);
            Response::json(408, "Request Timeout", json!({ "error": "request timeout" }))
        }
        Ok(raw) => match raw.and_then(|raw| RequestHead::parse(&raw)) {
            Ok(request) => {
                let response = respond(source.as_ref(), &request).await;
                tracing::debug!("{} {} -> {}", request.method, request.path, response.status);
                response
            }
            Err(e) => {
                tracing::debug!("Rejecting request: {}", e);
                Response::json(400, "Bad Request", json!({ "error": "bad request" }))
            }
        },
    };
    stream.write_all(&response.to_bytes()).await?;
    stream.flush().await?;
    stream.shutdown().await?;
    Ok(())
}

/// Where the server takes its connections from.
#[async_trait]
pub trait Accept: Send + Sync {
    async fn accept(&self) -> io::Result<(TcpStream, SocketAddr)>;
    fn local_addr(&self) -> io::Result<SocketAddr>;
}

#[async_trait]
impl Accept for TcpListener {
    async fn accept(&self) -> io::Result<(TcpStream, SocketAddr)> {
        TcpListener::accept(self).await
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        TcpListener::local_addr(self)
    }
}

/// Gallery endpoint bound to a local socket.
pub struct GalleryServer<S: ?Sized, L = TcpListener> {
    listener: L,
    source: Arc<S>,
    head_timeout: Duration,
}

impl<S> GalleryServer<S, TcpListener>
where
    S: Source<String> + ?Sized + 'static,
{
    pub async fn bind(addr: SocketAddr, source: Arc<S>) -> ModtacResult<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            source,
            head_timeout: DEFAULT_HEAD_TIMEOUT,
        })
    }
}

impl<S, L> GalleryServer<S, L>
where
    S: Source<String> + ?Sized + 'static,
    L: Accept,
{
    pub fn with_head_timeout(mut self, head_timeout: Duration) -> Self {
        self.head_timeout = head_timeout;
        self
    }

    pub fn local_addr(&self) -> ModtacResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until `shutdown` resolves. A failed `accept` is
    /// logged and retried after a short pause.
    pub async fn serve_until<F>(self, shutdown: F) -> ModtacResult<()>
    where
        F: Future<Output = ()>,
    {
        tracing::info!("Serving gallery on http://{}{}", self.local_addr()?, GALLERY_ROUTE);
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        let source = Arc::clone(&self.source);
                        let head_timeout = self.head_timeout;
                        tokio::spawn(async move {
                            if let Err(e) = handle_connection(stream, source, head_timeout).await {
                                tracing::debug!("Connection from {} failed: {}", peer, e);
                            }
                        });
                    }
                    Err(e) => {
                        tracing::warn!("Failed to accept connection, retrying: {}", e);
                        tokio::select! {
                            _ = &mut shutdown => break,
                            _ = tokio::time::sleep(ACCEPT_BACKOFF) => {}
                        }
                    }
                },
            }
        }
        tracing::info!("Gallery server shutting down");
        Ok(())
    }
}
