//! # csvgate Server
//!
//! HTTP front end for the csvgate validator. A single endpoint accepts a CSV
//! upload, runs it through the loader and the validator, and returns the
//! validation result as JSON.
//!
//! ## Endpoints
//!
//! - `POST /validate`: multipart upload with one `.csv` file
//! - `GET /health`: liveness probe
//!
//! ## Example
//!
//! ```no_run
//! use csvgate_server::{HttpServer, ServerConfig};
//!
//! # async fn run() -> csvgate_server::Result<()> {
//! let server = HttpServer::with_config(ServerConfig::with_port(8000));
//! server.start().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::*;
pub use error::*;
pub use routes::*;
pub use server::*;
