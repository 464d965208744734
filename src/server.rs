use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::config::Config;
use crate::protocol::{Command, Reply};
use crate::store::PriceStore;

/// HTTP server
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    store: Arc<PriceStore>,
}

impl Server {
    /// Create and bind the server, seeding the store from the configuration
    pub async fn bind(config: &Config) -> std::io::Result<Self> {
        let listener = TcpListener::bind(&config.server_addr).await?;
        let local_addr = listener.local_addr()?;
        info!("HTTP server bound to {}", local_addr);

        let store = Arc::new(PriceStore::with_entries(config.seed.clone()));
        info!("Price store seeded with {} items", store.len());

        Ok(Self {
            listener,
            local_addr,
            store,
        })
    }

    /// Get local listening address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Shared handle to the store
    pub fn store(&self) -> Arc<PriceStore> {
        Arc::clone(&self.store)
    }

    /// Build the router; every path segment is dispatched as a command name
    pub fn router(store: Arc<PriceStore>) -> Router {
        Router::new()
            .route("/:command", any(dispatch))
            .fallback(fallback)
            .with_state(store)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
    }

    /// Start server, accept and process requests until the process ends
    pub async fn run(self) -> std::io::Result<()> {
        info!("Server started, listening on {}", self.local_addr);
        let app = Self::router(self.store);
        axum::serve(self.listener, app).await
    }
}

async fn dispatch(
    State(store): State<Arc<PriceStore>>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    let command = Command::parse(&name, &params);
    let reply = command.execute(&store);
    info!(?command, status = %reply.status(), "command executed");
    reply
}

async fn fallback(uri: axum::http::Uri) -> Reply {
    Reply::NoRoute(uri.path().trim_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tower::ServiceExt;

    async fn call(app: &Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn sorted_lines(body: &str) -> Vec<&str> {
        let mut lines: Vec<&str> = body.lines().collect();
        lines.sort_unstable();
        lines
    }

    #[tokio::test]
    async fn test_price_and_list() {
        let app = Server::router(Arc::new(PriceStore::seeded()));

        let (status, body) = call(&app, "/price?item=shoes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "$50.00\n");

        let (status, body) = call(&app, "/list").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(sorted_lines(&body), vec!["shoes: $50.00", "socks: $5.00"]);
    }

    #[tokio::test]
    async fn test_write_commands() {
        let store = Arc::new(PriceStore::seeded());
        let app = Server::router(Arc::clone(&store));

        let (status, body) = call(&app, "/update?item=socks&price=7").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(sorted_lines(&body), vec!["shoes: $50.00", "socks: $7.00"]);

        let (status, body) = call(&app, "/delete?item=shoes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "socks: $7.00\n");

        let (status, body) = call(&app, "/create?item=hat&price=12").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(sorted_lines(&body), vec!["hat: $12.00", "socks: $7.00"]);

        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_error_statuses() {
        let app = Server::router(Arc::new(PriceStore::seeded()));

        let (status, body) = call(&app, "/price?item=hat").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "no such item: \"hat\"\n");

        let (status, _) = call(&app, "/update?item=hat&price=3").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = call(&app, "/create?item=hat&price=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "new price is invalid: \"abc\"\n");

        let (status, _) = call(&app, "/create?price=3").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(&app, "/flush").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = call(&app, "/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bind_and_serve() {
        let config = Config {
            server_addr: "127.0.0.1:0".to_string(),
            ..Config::default()
        };
        let server = Server::bind(&config).await.unwrap();
        let addr = server.local_addr();
        assert_ne!(addr.port(), 0);
        assert_eq!(server.store().len(), 2);

        let handle = tokio::spawn(server.run());

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /price?item=socks HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK"), "{}", response);
        assert!(response.ends_with("$5.00\n"), "{}", response);

        handle.abort();
    }
}
