//! Group member roster.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A single group member: a display name plus their interest flags.
///
/// Names carry no identity; duplicates are permitted and never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    pub name: String,
    pub preferences: HashMap<String, bool>,
}

/// Append-only, insertion-ordered member list for the process lifetime.
///
/// The `RwLock` serializes appends so each `add` observes the roster as of
/// its own insertion; reads run concurrently. The lock is never held across
/// I/O.
#[derive(Default)]
pub struct GroupRoster {
    members: RwLock<Vec<GroupMember>>,
}

impl GroupRoster {
    /// Append a member and return a snapshot of the roster including them.
    ///
    /// No uniqueness check and no capacity limit.
    pub async fn add(&self, member: GroupMember) -> Vec<GroupMember> {
        let mut members = self.members.write().await;
        members.push(member);
        members.clone()
    }

    /// Snapshot the roster in insertion order.
    pub async fn list(&self) -> Vec<GroupMember> {
        self.members.read().await.clone()
    }
}
