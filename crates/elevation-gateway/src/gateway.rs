//! Main Gateway implementation
//!
//! HTTP front end for the elevation response builder.

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};
use elevation_core::{LookupError, Reply};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::response::JsonBody;
use crate::{GatewayError, Result};

/// Gateway state shared across handlers
#[derive(Clone)]
pub struct GatewayState {
    pub config: GatewayConfig,
    rng: Arc<Mutex<StdRng>>,
    shutdown_tx: broadcast::Sender<()>,
}

impl GatewayState {
    pub fn new(config: GatewayConfig) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng: Arc::new(Mutex::new(rng)),
            shutdown_tx,
        }
    }

    /// Run `f` with exclusive use of the shared RNG.
    ///
    /// The lock is released before `f`'s result is returned, so it is never
    /// held across an `.await`.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock();
        f(&mut rng)
    }

    /// Body for a value that cannot fail
    fn json<T: Serialize>(&self, value: T) -> JsonBody<T> {
        JsonBody::pretty(value).with_pretty(self.config.pretty)
    }

    /// Body for a core result; lookup failures keep 200 unless strict
    fn reply<T: Serialize>(&self, result: std::result::Result<T, LookupError>) -> JsonBody<Reply<T>> {
        let reply = Reply::from(result);
        let status = if reply.is_failure() && self.config.strict_status {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::OK
        };
        self.json(reply).with_status(status)
    }
}

impl std::fmt::Debug for GatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Decoded query string, in request order
///
/// Repeated keys keep their first non-empty value and bad percent escapes
/// decode lossily, so a query string never fails to extract.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First non-empty value of `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }
}

/// Captured path segment, or the raw segment when it is not valid UTF-8
fn segment(path: std::result::Result<Path<String>, PathRejection>, uri: &Uri) -> String {
    match path {
        Ok(Path(segment)) => segment,
        Err(rejection) => {
            tracing::debug!("Keeping raw segment of {}: {}", uri.path(), rejection);
            uri.path().rsplit('/').next().unwrap_or_default().to_string()
        }
    }
}

#[derive(Debug, Serialize)]
struct NotFound {
    error: &'static str,
    path: String,
}

/// Main Gateway
#[derive(Debug)]
pub struct Gateway {
    state: Arc<GatewayState>,
}

impl Gateway {
    /// Create a new gateway with configuration
    pub fn new(config: GatewayConfig) -> Self {
        let state = Arc::new(GatewayState::new(config));
        Self { state }
    }

    /// Create a gateway with default configuration
    pub fn default_config() -> Self {
        Self::new(GatewayConfig::default())
    }

    /// Get gateway state
    pub fn state(&self) -> Arc<GatewayState> {
        self.state.clone()
    }

    /// Build the Axum router
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(Self::handle_index))
            .route("/health", get(Self::handle_health))
            .route("/substances", get(Self::handle_substances))
            .route("/menu", get(Self::handle_menu))
            .route("/elevate/", get(Self::handle_elevate_nothing))
            .route("/elevate/:substance", get(Self::handle_elevate))
            .route("/wisdom", get(Self::handle_wisdom))
            .route("/vibe", get(Self::handle_vibe_check))
            .route("/vibe/", get(Self::handle_vibe_check))
            .route("/vibe/:vibe_name", get(Self::handle_vibe_set))
            .route("/cocktail", get(Self::handle_cocktail))
            .route("/tolerance-break", get(Self::handle_tolerance_break))
            .fallback(Self::handle_not_found)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Bind the configured address and serve until shutdown
    pub async fn start(&self) -> Result<()> {
        let addr = self.state.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await.map_err(GatewayError::Io)?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl+C or [`Gateway::shutdown`]
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        let mut shutdown_rx = self.state.shutdown_tx.subscribe();
        let router = self.build_router();

        if let Ok(addr) = listener.local_addr() {
            tracing::info!("🌿 Elevation gateway listening on {}", addr);
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = shutdown_rx.recv() => {}
                }
            })
            .await
            .map_err(|e| GatewayError::Internal(e.to_string()))?;

        tracing::info!("Gateway stopped");
        Ok(())
    }

    /// Shutdown the gateway
    pub fn shutdown(&self) {
        let _ = self.state.shutdown_tx.send(());
        tracing::info!("Gateway shutdown initiated");
    }

    // HTTP handlers

    async fn handle_index(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
        state.json(elevation_core::service_info())
    }

    async fn handle_health(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
        state.json(serde_json::json!({
            "status": "ok",
            "version": crate::VERSION,
        }))
    }

    async fn handle_substances(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
        state.json(elevation_core::catalog())
    }

    async fn handle_menu(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
        state.json(elevation_core::menu())
    }

    async fn handle_elevate(
        State(state): State<Arc<GatewayState>>,
        path: std::result::Result<Path<String>, PathRejection>,
        uri: Uri,
        Query(params): Query<QueryParams>,
    ) -> impl IntoResponse {
        let substance = segment(path, &uri);
        Self::elevate(&state, &substance, &params)
    }

    async fn handle_elevate_nothing(
        State(state): State<Arc<GatewayState>>,
        Query(params): Query<QueryParams>,
    ) -> impl IntoResponse {
        Self::elevate(&state, "", &params)
    }

    fn elevate(state: &GatewayState, substance: &str, params: &QueryParams) -> impl IntoResponse {
        let agent_id = params.first("agent_id");
        let result = state.with_rng(|rng| elevation_core::get_elevation(rng, substance, agent_id));
        state.reply(result)
    }

    async fn handle_wisdom(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
        let wisdom = state.with_rng(|rng| elevation_core::get_random_wisdom(rng));
        state.json(wisdom)
    }

    async fn handle_vibe_check(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
        let result = state.with_rng(|rng| elevation_core::check_vibe(rng, None));
        state.reply(result)
    }

    async fn handle_vibe_set(
        State(state): State<Arc<GatewayState>>,
        path: std::result::Result<Path<String>, PathRejection>,
        uri: Uri,
    ) -> impl IntoResponse {
        let vibe_name = segment(path, &uri);
        let result = state.with_rng(|rng| elevation_core::check_vibe(rng, Some(vibe_name.as_str())));
        state.reply(result)
    }

    async fn handle_cocktail(
        State(state): State<Arc<GatewayState>>,
        Query(params): Query<QueryParams>,
    ) -> impl IntoResponse {
        let keys = elevation_core::parse_mix(params.first("mix").unwrap_or_default());
        let result = state.with_rng(|rng| elevation_core::get_cocktail(rng, &keys));
        state.reply(result)
    }

    async fn handle_tolerance_break(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
        state.json(elevation_core::get_tolerance_break())
    }

    async fn handle_not_found(State(state): State<Arc<GatewayState>>, uri: Uri) -> impl IntoResponse {
        tracing::debug!("No route for {}", uri.path());
        state
            .json(NotFound {
                error: "Endpoint not found",
                path: uri.path().to_string(),
            })
            .with_status(StatusCode::NOT_FOUND)
    }
}
