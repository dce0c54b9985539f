//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with a single dispatching fallback
//! - Wire up middleware (request ID, tracing, timeout, CORS on layer-built responses)
//! - Serve on a listener until shutdown
//! - Log and record metrics around each dispatch

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::map_response,
    response::Response,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::dispatch;
use crate::http::request::{self, RequestIdGenerator};
use crate::http::response;
use crate::observability::metrics;

/// Error type for the serving loop.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into the handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub max_body_size: usize,
}

/// HTTP front end for the dispatcher.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            router: Self::build_router(&config),
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Oversized bodies are not rejected here: the handler reads at most
    /// `limits.max_body_size` bytes and dispatches without the body otherwise.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig) -> Router {
        let state = AppState {
            max_body_size: config.limits.max_body_size,
        };

        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(map_response(with_cors))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(RequestIdGenerator))
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Fills in CORS headers on responses the dispatcher did not build (e.g. 408).
async fn with_cors(response: Response) -> Response {
    response::with_cors(response)
}

/// Every method and path lands here.
async fn dispatch_handler(State(state): State<AppState>, req: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request::request_id(req.headers()).to_string();

    let descriptor = request::into_descriptor(req, state.max_body_size).await;
    let resolution = dispatch::resolve(&descriptor);
    let outcome = dispatch::render(&descriptor, resolution);

    tracing::info!(
        request_id = %request_id,
        method = %descriptor.method(),
        path = %descriptor.path(),
        status = outcome.status_code,
        route = resolution.label(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Request dispatched"
    );
    metrics::record_request(
        descriptor.method(),
        outcome.status_code,
        resolution.label(),
        start,
    );

    response::into_response(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    fn app() -> Router {
        HttpServer::new(ServiceConfig::default()).router()
    }

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_through_router() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert!(resp.headers().contains_key("x-request-id"));
        assert_eq!(body_json(resp).await["data"]["status"], "healthy");
    }

    #[tokio::test]
    async fn test_query_string_is_not_part_of_path() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/missing?debug=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(resp).await["message"],
            "Endpoint /missing not found"
        );
    }

    #[tokio::test]
    async fn test_incoming_request_id_is_echoed() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/v1")
                    .header("x-request-id", "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["x-request-id"], "req-123");
        assert_eq!(
            resp.headers()["access-control-allow-methods"],
            "GET, POST, OPTIONS, PUT, DELETE"
        );
    }

    #[tokio::test]
    async fn test_large_declared_body_still_dispatches() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_size = 8;
        let resp = HttpServer::new(config)
            .router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/health")
                    .header("content-length", "64")
                    .body(Body::from(vec![b'x'; 64]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(body_json(resp).await["data"]["status"], "healthy");
    }

    #[tokio::test]
    async fn test_layer_built_responses_get_cors() {
        let timed_out = Response::builder()
            .status(StatusCode::REQUEST_TIMEOUT)
            .body(Body::empty())
            .unwrap();

        let resp = with_cors(timed_out).await;
        assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(
            resp.headers()["access-control-allow-headers"],
            "Content-Type, Authorization"
        );
    }
}
