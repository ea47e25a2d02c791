//! In-memory global stats store with optimistic versioning.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::membership::GlobalStats;
use crate::ports::{GlobalStatsStore, VersionedStats};

/// In-memory implementation of the `GlobalStatsStore` port.
///
/// Commits are compare-and-swap on an internal version counter, so a writer
/// that loaded stale stats fails with a version conflict instead of silently
/// overwriting a concurrent upgrade.
pub struct InMemoryStatsStore {
    state: Mutex<(GlobalStats, u64)>,
}

impl InMemoryStatsStore {
    /// Creates a store holding the given initial stats at version 0.
    pub fn new(stats: GlobalStats) -> Self {
        Self {
            state: Mutex::new((stats, 0)),
        }
    }

    /// Creates a store with zeroed stats.
    pub fn empty(now: Timestamp) -> Self {
        Self::new(GlobalStats::new(now))
    }

    /// Creates a store seeded with the launch baseline.
    pub fn with_launch_baseline(now: Timestamp) -> Self {
        Self::new(GlobalStats::launch_baseline(now))
    }
}

#[async_trait]
impl GlobalStatsStore for InMemoryStatsStore {
    async fn snapshot(&self) -> Result<GlobalStats, DomainError> {
        Ok(self.state.lock().unwrap().0.clone())
    }

    async fn load(&self) -> Result<VersionedStats, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(VersionedStats {
            stats: state.0.clone(),
            version: state.1,
        })
    }

    async fn commit(&self, stats: GlobalStats, expected_version: u64) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();
        if state.1 != expected_version {
            return Err(DomainError::new(
                ErrorCode::VersionConflict,
                format!(
                    "Stats were committed at version {} while writer held version {}",
                    state.1, expected_version
                ),
            ));
        }
        *state = (stats, expected_version + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::now()
    }

    #[tokio::test]
    async fn load_returns_initial_version_zero() {
        let store = InMemoryStatsStore::with_launch_baseline(now());
        let versioned = store.load().await.unwrap();

        assert_eq!(versioned.version, 0);
        assert_eq!(versioned.stats.next_member_number, 4893);
    }

    #[tokio::test]
    async fn commit_with_matching_version_succeeds() {
        let store = InMemoryStatsStore::empty(now());
        let mut versioned = store.load().await.unwrap();

        versioned.stats.issue_member_number();
        store.commit(versioned.stats, versioned.version).await.unwrap();

        let after = store.load().await.unwrap();
        assert_eq!(after.version, 1);
        assert_eq!(after.stats.total_members, 1);
    }

    #[tokio::test]
    async fn commit_with_stale_version_fails() {
        let store = InMemoryStatsStore::empty(now());
        let first = store.load().await.unwrap();
        let second = store.load().await.unwrap();

        // First writer wins.
        let mut stats = first.stats.clone();
        stats.issue_member_number();
        store.commit(stats, first.version).await.unwrap();

        // Second writer held the same version and must conflict.
        let mut stale = second.stats.clone();
        stale.issue_member_number();
        let result = store.commit(stale, second.version).await;

        assert!(matches!(result, Err(e) if e.code == ErrorCode::VersionConflict));

        // The first writer's commit is intact.
        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.total_members, 1);
        assert_eq!(snapshot.next_member_number, 2);
    }

    #[tokio::test]
    async fn retry_after_conflict_succeeds() {
        let store = InMemoryStatsStore::empty(now());
        let stale = store.load().await.unwrap();

        let fresh = store.load().await.unwrap();
        let mut stats = fresh.stats.clone();
        stats.issue_member_number();
        store.commit(stats, fresh.version).await.unwrap();

        // Stale writer conflicts, reloads, and retries.
        let mut stale_stats = stale.stats.clone();
        stale_stats.issue_member_number();
        assert!(store.commit(stale_stats, stale.version).await.is_err());

        let reloaded = store.load().await.unwrap();
        let mut retried = reloaded.stats.clone();
        let second_number = retried.issue_member_number();
        store.commit(retried, reloaded.version).await.unwrap();

        // Both writers got distinct, increasing numbers.
        assert_eq!(second_number.value(), 2);
        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.next_member_number, 3);
    }

    #[tokio::test]
    async fn snapshot_does_not_advance_version() {
        let store = InMemoryStatsStore::empty(now());
        let _ = store.snapshot().await.unwrap();
        let _ = store.snapshot().await.unwrap();
        assert_eq!(store.load().await.unwrap().version, 0);
    }
}
