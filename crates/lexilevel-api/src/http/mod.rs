//! HTTP/REST API layer for Lexilevel.
//!
//! Axum-based REST API at `/api/v1/` with cookie or bearer-token sessions,
//! envelope response format, and CORS support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
