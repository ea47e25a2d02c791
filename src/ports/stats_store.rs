//! Global stats store port.
//!
//! The registrar's cursor updates are a read-modify-write on shared state,
//! which is only correct when writers are serialized. This port makes the
//! transaction boundary explicit through optimistic versioning: callers
//! `load` a versioned copy, apply the registrar, and `commit` against the
//! version they read. A conflicting commit fails and the caller retries
//! from a fresh load.

use crate::domain::foundation::DomainError;
use crate::domain::membership::GlobalStats;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Stats paired with the version they were read at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedStats {
    /// The stats as of `version`.
    pub stats: GlobalStats,
    /// Monotonic commit counter, starting at 0 for the initial state.
    pub version: u64,
}

/// Store port for the global membership aggregates.
#[async_trait]
pub trait GlobalStatsStore: Send + Sync {
    /// Read-only copy of the current stats for display.
    async fn snapshot(&self) -> Result<GlobalStats, DomainError>;

    /// Load the stats together with their current version for an update.
    async fn load(&self) -> Result<VersionedStats, DomainError>;

    /// Commit updated stats against the version they were loaded at.
    ///
    /// Fails with [`crate::domain::foundation::ErrorCode::VersionConflict`]
    /// if another writer committed since the load.
    async fn commit(&self, stats: GlobalStats, expected_version: u64) -> Result<(), DomainError>;
}
