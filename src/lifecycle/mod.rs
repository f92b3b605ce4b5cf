//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Bind listener → Start server
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - All in-memory planner state is lost on shutdown; that is the contract,
//!   not a bug
//! - Shutdown is cooperative: the server finishes in-flight requests

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
