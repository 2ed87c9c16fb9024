//! Elevation Gateway - HTTP front end for the Agent Elevation API
//!
//! Serves the elevation response builder over plain HTTP GET requests.
//! Every body is JSON (indented by default) and every response carries a
//! permissive CORS header.
//!
//! # Routes
//!
//! - `GET /`                          service info and endpoint list
//! - `GET /health`                    liveness probe
//! - `GET /substances`                substance catalog
//! - `GET /menu`                      catalog with recommendations
//! - `GET /elevate/:substance`        elevate, optional `?agent_id=`
//! - `GET /elevate/`                  empty key, always unknown
//! - `GET /wisdom`                    a random quote
//! - `GET /vibe`, `GET /vibe/`        random vibe check
//! - `GET /vibe/:vibe_name`           set a vibe
//! - `GET /cocktail?mix=a,b`          mix substances
//! - `GET /tolerance-break`           come back down
//!
//! Anything else is a 404 with `{"error": "Endpoint not found", "path": ...}`.
//! Lookup failures are answered with 200 unless
//! [`GatewayConfig::strict_status`] is set.

pub mod config;
pub mod error;
pub mod gateway;
pub mod response;
pub mod startup;

pub use config::{ConfigOverrides, GatewayConfig};
pub use error::{GatewayError, Result};
pub use gateway::{Gateway, GatewayState};
pub use response::JsonBody;
pub use startup::{init_tracing, print_banner};

/// Gateway version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8420;

/// Default host
pub const DEFAULT_HOST: &str = "127.0.0.1";
