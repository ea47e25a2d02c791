//! Per-member usage counters.
//!
//! Tracks how many of each limited resource a member currently holds, plus
//! the daily AI request counter. Counters are incremented when a resource is
//! created and decremented (floored at zero) when one is deleted. The AI
//! counter rolls over to zero at the UTC day boundary.

use super::ResourceKind;
use crate::domain::foundation::Timestamp;
use serde::{Deserialize, Serialize};

/// Mutable usage tallies for one member.
///
/// Single-writer: callers are expected to load, mutate, and persist the
/// owning member as one unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Habits currently tracked.
    pub habits_count: u32,
    /// Tasks currently open.
    pub tasks_count: u32,
    /// Journal entries currently stored.
    pub journal_entries_count: u32,
    /// AI requests issued since `last_ai_reset`.
    pub ai_requests_today: u32,
    /// Start of the current AI quota window.
    pub last_ai_reset: Timestamp,
}

impl Usage {
    /// Creates zeroed usage counters with the AI window starting now.
    pub fn empty(now: Timestamp) -> Self {
        Self {
            habits_count: 0,
            tasks_count: 0,
            journal_entries_count: 0,
            ai_requests_today: 0,
            last_ai_reset: now,
        }
    }

    /// Returns the effective count for a resource kind.
    ///
    /// The AI counter reads as zero once the UTC day has rolled over, even
    /// if the stored counter has not been reset yet.
    pub fn count_for(&self, kind: ResourceKind, now: Timestamp) -> u32 {
        match kind {
            ResourceKind::Habits => self.habits_count,
            ResourceKind::Tasks => self.tasks_count,
            ResourceKind::JournalEntries => self.journal_entries_count,
            ResourceKind::AiRequestsPerDay => {
                if now.is_later_day_than(&self.last_ai_reset) {
                    0
                } else {
                    self.ai_requests_today
                }
            }
        }
    }

    /// Increments the counter for a created resource.
    ///
    /// The AI counter is not a resource count; use [`Usage::record_ai_request`]
    /// for it instead.
    pub fn record_created(&mut self, kind: ResourceKind) {
        match kind {
            ResourceKind::Habits => self.habits_count += 1,
            ResourceKind::Tasks => self.tasks_count += 1,
            ResourceKind::JournalEntries => self.journal_entries_count += 1,
            ResourceKind::AiRequestsPerDay => self.ai_requests_today += 1,
        }
    }

    /// Decrements the counter for a deleted resource, floored at zero.
    pub fn record_deleted(&mut self, kind: ResourceKind) {
        let counter = match kind {
            ResourceKind::Habits => &mut self.habits_count,
            ResourceKind::Tasks => &mut self.tasks_count,
            ResourceKind::JournalEntries => &mut self.journal_entries_count,
            ResourceKind::AiRequestsPerDay => &mut self.ai_requests_today,
        };
        *counter = counter.saturating_sub(1);
    }

    /// Records one AI request, rolling the daily window first if the UTC
    /// day has changed since the last reset.
    pub fn record_ai_request(&mut self, now: Timestamp) {
        if now.is_later_day_than(&self.last_ai_reset) {
            self.ai_requests_today = 0;
            self.last_ai_reset = now;
        }
        self.ai_requests_today += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_one() -> Timestamp {
        // 2024-01-15T12:00:00Z
        Timestamp::from_unix_secs(1705320000)
    }

    fn day_two() -> Timestamp {
        day_one().add_days(1)
    }

    #[test]
    fn empty_usage_is_all_zero() {
        let usage = Usage::empty(day_one());
        assert_eq!(usage.habits_count, 0);
        assert_eq!(usage.tasks_count, 0);
        assert_eq!(usage.journal_entries_count, 0);
        assert_eq!(usage.ai_requests_today, 0);
    }

    #[test]
    fn record_created_increments_counter() {
        let mut usage = Usage::empty(day_one());
        usage.record_created(ResourceKind::Tasks);
        usage.record_created(ResourceKind::Tasks);
        assert_eq!(usage.tasks_count, 2);
        assert_eq!(usage.habits_count, 0);
    }

    #[test]
    fn record_deleted_decrements_counter() {
        let mut usage = Usage::empty(day_one());
        usage.record_created(ResourceKind::Habits);
        usage.record_created(ResourceKind::Habits);
        usage.record_deleted(ResourceKind::Habits);
        assert_eq!(usage.habits_count, 1);
    }

    #[test]
    fn record_deleted_floors_at_zero() {
        let mut usage = Usage::empty(day_one());
        usage.record_deleted(ResourceKind::JournalEntries);
        assert_eq!(usage.journal_entries_count, 0);
    }

    #[test]
    fn ai_request_increments_within_same_day() {
        let mut usage = Usage::empty(day_one());
        usage.record_ai_request(day_one());
        usage.record_ai_request(day_one());
        assert_eq!(usage.ai_requests_today, 2);
    }

    #[test]
    fn ai_counter_reads_zero_after_day_rollover() {
        let mut usage = Usage::empty(day_one());
        usage.record_ai_request(day_one());
        usage.record_ai_request(day_one());

        assert_eq!(usage.count_for(ResourceKind::AiRequestsPerDay, day_one()), 2);
        assert_eq!(usage.count_for(ResourceKind::AiRequestsPerDay, day_two()), 0);
    }

    #[test]
    fn ai_request_on_new_day_resets_window() {
        let mut usage = Usage::empty(day_one());
        usage.record_ai_request(day_one());
        usage.record_ai_request(day_one());

        usage.record_ai_request(day_two());
        assert_eq!(usage.ai_requests_today, 1);
        assert_eq!(usage.last_ai_reset, day_two());
    }

    #[test]
    fn count_for_reports_live_counters() {
        let mut usage = Usage::empty(day_one());
        usage.record_created(ResourceKind::Habits);
        usage.record_created(ResourceKind::Tasks);
        usage.record_created(ResourceKind::JournalEntries);

        assert_eq!(usage.count_for(ResourceKind::Habits, day_one()), 1);
        assert_eq!(usage.count_for(ResourceKind::Tasks, day_one()), 1);
        assert_eq!(usage.count_for(ResourceKind::JournalEntries, day_one()), 1);
    }
}
