//! GetGlobalStatsHandler - Query handler for the community dashboard.

use std::sync::Arc;

use crate::domain::membership::{GlobalStats, MembershipError};
use crate::ports::GlobalStatsStore;

/// Query for the global membership aggregates.
#[derive(Debug, Clone, Default)]
pub struct GetGlobalStatsQuery;

/// Handler that returns a read-only snapshot of the aggregates.
///
/// Snapshots never touch the version counter, so dashboard traffic cannot
/// conflict with in-flight upgrades.
pub struct GetGlobalStatsHandler {
    stats: Arc<dyn GlobalStatsStore>,
}

impl GetGlobalStatsHandler {
    pub fn new(stats: Arc<dyn GlobalStatsStore>) -> Self {
        Self { stats }
    }

    pub async fn handle(&self, _query: GetGlobalStatsQuery) -> Result<GlobalStats, MembershipError> {
        Ok(self.stats.snapshot().await?)
    }
}
