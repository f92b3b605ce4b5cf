//! Trip planning domain: preference storage, itinerary generation,
//! chat responses, and the group roster.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → PlannerState (owned tables, shared via Arc)
//!     → preferences.rs / group.rs (mutate or read a table)
//!     → itinerary.rs / chat.rs (pure, stateless)
//!     → response DTO back to the handler
//! ```
//!
//! # Design Decisions
//! - All state lives in one explicitly owned container with the lifetime of
//!   the application, not in process globals
//! - Nothing is ever deleted or evicted; a restart loses all state
//! - Each table states its own concurrency strategy (see field docs)

pub mod chat;
pub mod group;
pub mod itinerary;
pub mod preferences;

pub use group::{GroupMember, GroupRoster};
pub use preferences::{PreferenceRecord, PreferenceStore};

/// Container for all in-memory planner state.
///
/// Handlers receive this behind an `Arc`; tables handle their own
/// synchronization, so no outer lock is needed.
#[derive(Default)]
pub struct PlannerState {
    /// Per-user preference records, keyed by opaque user id.
    pub preferences: PreferenceStore,

    /// Ordered group member list, append-only.
    pub roster: GroupRoster,
}

impl PlannerState {
    /// Create empty planner state, as at process start.
    pub fn new() -> Self {
        Self::default()
    }
}
