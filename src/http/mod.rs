//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (add request ID)
//!     → handlers.rs (deserialize body, call into planner, serialize reply)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - Request/response bodies are explicit serde types, validated at the
//!   boundary; no free-form JSON reaches the handlers
//! - Handlers have no error paths; the only client error is a malformed
//!   body, rejected by the extractor

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
