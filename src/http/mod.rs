//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Exposes the conversions over HTTP/JSON via the Axum web
//! framework, with permissive CORS and request logging.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use handlers::*;
pub use server::{cors_layer, router, serve};
