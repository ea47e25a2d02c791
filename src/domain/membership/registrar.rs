//! Membership registrar.
//!
//! Performs a tier change for one member and, where it crosses a numbering
//! threshold, assigns permanent identifiers and updates the global
//! aggregates. The whole sequence is one logical unit of work: callers wrap
//! it in a transaction boundary (see the stats store port) so the cursor
//! read-increment-write is isolated from concurrent upgraders.

use crate::domain::foundation::Timestamp;

use super::{GlobalStats, Member, MembershipEvent, Tier};

/// Result of a registrar upgrade.
#[derive(Debug, Clone)]
pub struct UpgradeOutcome {
    /// The member with the tier change and any number assignments applied.
    pub member: Member,
    /// The most specific welcome message produced by the upgrade.
    pub message: String,
    /// Events emitted for audit logging.
    pub events: Vec<MembershipEvent>,
}

/// Domain service that applies tier changes.
///
/// Carries the configured donation amount collected on each first Master
/// upgrade.
#[derive(Debug, Clone)]
pub struct Registrar {
    donation_per_master_cents: u64,
}

impl Registrar {
    /// Creates a registrar with the given Master-upgrade donation amount.
    pub fn new(donation_per_master_cents: u64) -> Self {
        Self {
            donation_per_master_cents,
        }
    }

    /// Applies a tier change, assigning permanent numbers where thresholds
    /// are crossed.
    ///
    /// The steps run in a fixed order:
    ///
    /// 1. First paid upgrade assigns a member number from the global cursor
    ///    and counts the member into the paid totals.
    /// 2. First Master upgrade assigns a master number, moves the member
    ///    between active buckets, and records the donation.
    /// 3. The tier field is set unconditionally and `last_updated` refreshed.
    ///
    /// Each numbering assignment happens at most once per member, ever:
    /// both are guarded by the number being currently unset. Repeat upgrades
    /// and downgrades fall through to a generic message and leave the
    /// numbers and cursors untouched.
    ///
    /// The caller's member is not mutated; the updated copy is returned in
    /// the outcome. `stats` is mutated in place as part of the enclosing
    /// unit of work.
    pub fn upgrade(
        &self,
        member: &Member,
        target_tier: Tier,
        stats: &mut GlobalStats,
        now: Timestamp,
    ) -> UpgradeOutcome {
        let mut updated = member.clone();
        let mut events = Vec::new();
        let mut message = format!("Successfully upgraded to {}!", target_tier.display_name());

        if target_tier.is_paid() && !member.has_member_number() {
            let assigned = stats.issue_member_number();
            updated.member_number = Some(assigned);
            updated.joined_paid_at = Some(now);
            message = format!("Welcome, Daily Cultivator #{}!", assigned);
            events.push(MembershipEvent::MemberNumberAssigned {
                user_id: updated.user_id.clone(),
                number: assigned,
                occurred_at: now,
            });
        }

        if target_tier == Tier::Master && !member.has_master_number() {
            let assigned = stats.issue_master_number(member.tier);
            stats.record_donation(self.donation_per_master_cents);
            updated.master_number = Some(assigned);
            updated.upgraded_to_master_at = Some(now);
            message = format!("Welcome, Master Cultivator #{}!", assigned);
            events.push(MembershipEvent::MasterNumberAssigned {
                user_id: updated.user_id.clone(),
                number: assigned,
                donation_cents: self.donation_per_master_cents,
                occurred_at: now,
            });
        }

        events.push(MembershipEvent::TierChanged {
            user_id: updated.user_id.clone(),
            previous_tier: member.tier,
            new_tier: target_tier,
            occurred_at: now,
        });

        updated.tier = target_tier;
        updated.updated_at = now;
        stats.touch(now);

        UpgradeOutcome {
            member: updated,
            message,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MemberId, UserId};
    use crate::domain::membership::{MasterNumber, MemberNumber};

    const DONATION_CENTS: u64 = 100;

    fn registrar() -> Registrar {
        Registrar::new(DONATION_CENTS)
    }

    fn now() -> Timestamp {
        Timestamp::from_unix_secs(1705320000)
    }

    fn guest() -> Member {
        Member::guest(
            MemberId::new(),
            UserId::new("user-123").unwrap(),
            "Guest Cultivator",
            now(),
        )
    }

    // First paid upgrade

    #[test]
    fn first_daily_upgrade_assigns_member_number_from_cursor() {
        let mut stats = GlobalStats::launch_baseline(now());
        let member = guest();

        let outcome = registrar().upgrade(&member, Tier::Daily, &mut stats, now());

        assert_eq!(outcome.member.member_number, Some(MemberNumber::new(4893)));
        assert_eq!(stats.next_member_number, 4894);
        assert_eq!(stats.total_members, 4893);
        assert_eq!(stats.active_daily_cultivators, 4766);
        assert!(outcome.message.contains("4893"));
    }

    #[test]
    fn first_daily_upgrade_sets_tier_and_paid_date() {
        let mut stats = GlobalStats::launch_baseline(now());
        let member = guest();

        let outcome = registrar().upgrade(&member, Tier::Daily, &mut stats, now());

        assert_eq!(outcome.member.tier, Tier::Daily);
        assert_eq!(outcome.member.joined_paid_at, Some(now()));
        assert!(outcome.member.master_number.is_none());
    }

    #[test]
    fn upgrade_does_not_mutate_caller_member() {
        let mut stats = GlobalStats::launch_baseline(now());
        let member = guest();

        let _ = registrar().upgrade(&member, Tier::Daily, &mut stats, now());

        assert_eq!(member.tier, Tier::Cultivator);
        assert!(member.member_number.is_none());
    }

    // Idempotent numbering

    #[test]
    fn second_daily_upgrade_does_not_reassign_number() {
        let mut stats = GlobalStats::launch_baseline(now());
        let member = guest();

        let first = registrar().upgrade(&member, Tier::Daily, &mut stats, now());
        let stats_after_first = stats.clone();

        let second = registrar().upgrade(&first.member, Tier::Daily, &mut stats, now());

        assert_eq!(second.member.member_number, Some(MemberNumber::new(4893)));
        assert_eq!(stats.next_member_number, stats_after_first.next_member_number);
        assert_eq!(stats.total_members, stats_after_first.total_members);
        assert!(second.message.contains("Successfully upgraded"));
    }

    #[test]
    fn numbered_member_keeps_number_at_1234() {
        let mut stats = GlobalStats::launch_baseline(now());
        let mut member = guest();
        member.member_number = Some(MemberNumber::new(1234));
        member.tier = Tier::Daily;

        let before = stats.clone();
        let outcome = registrar().upgrade(&member, Tier::Daily, &mut stats, now());

        assert_eq!(outcome.member.member_number, Some(MemberNumber::new(1234)));
        assert_eq!(stats.next_member_number, before.next_member_number);
        assert_eq!(stats.total_members, before.total_members);
    }

    // Master upgrades

    #[test]
    fn daily_to_master_assigns_master_number_and_moves_buckets() {
        let mut stats = GlobalStats::launch_baseline(now());
        let member = guest();
        let daily = registrar().upgrade(&member, Tier::Daily, &mut stats, now()).member;

        let daily_count_before = stats.active_daily_cultivators;
        let donated_before = stats.total_donated_cents;

        let outcome = registrar().upgrade(&daily, Tier::Master, &mut stats, now());

        assert_eq!(outcome.member.master_number, Some(MasterNumber::new(128)));
        assert_eq!(stats.next_master_number, 129);
        assert_eq!(stats.active_master_cultivators, 128);
        assert_eq!(stats.active_daily_cultivators, daily_count_before - 1);
        assert_eq!(stats.total_donated_cents, donated_before + DONATION_CENTS);
        assert!(outcome.message.contains("128"));
    }

    #[test]
    fn direct_cultivator_to_master_assigns_both_numbers() {
        let mut stats = GlobalStats::launch_baseline(now());
        let member = guest();

        let outcome = registrar().upgrade(&member, Tier::Master, &mut stats, now());

        assert_eq!(outcome.member.member_number, Some(MemberNumber::new(4893)));
        assert_eq!(outcome.member.master_number, Some(MasterNumber::new(128)));
        // Step 1 counts the member into the daily bucket; step 2 only vacates
        // a slot when the previous tier was Daily, so the count stays raised.
        assert_eq!(stats.active_daily_cultivators, 4766);
        assert_eq!(stats.active_master_cultivators, 128);
        // The master welcome is the most specific message.
        assert!(outcome.message.contains("Master Cultivator #128"));
    }

    #[test]
    fn repeat_master_upgrade_adds_no_second_donation() {
        let mut stats = GlobalStats::launch_baseline(now());
        let member = guest();
        let master = registrar().upgrade(&member, Tier::Master, &mut stats, now()).member;

        let donated_before = stats.total_donated_cents;
        let outcome = registrar().upgrade(&master, Tier::Master, &mut stats, now());

        assert_eq!(stats.total_donated_cents, donated_before);
        assert_eq!(outcome.member.master_number, master.master_number);
    }

    // Downgrades

    #[test]
    fn downgrade_keeps_permanent_numbers() {
        let mut stats = GlobalStats::launch_baseline(now());
        let member = guest();
        let master = registrar().upgrade(&member, Tier::Master, &mut stats, now()).member;

        let outcome = registrar().upgrade(&master, Tier::Cultivator, &mut stats, now());

        assert_eq!(outcome.member.tier, Tier::Cultivator);
        assert_eq!(outcome.member.member_number, master.member_number);
        assert_eq!(outcome.member.master_number, master.master_number);
        assert!(outcome.message.contains("Successfully upgraded"));
    }

    #[test]
    fn cursors_never_decrease_across_downgrade_and_reupgrade() {
        let mut stats = GlobalStats::launch_baseline(now());
        let member = guest();

        let master = registrar().upgrade(&member, Tier::Master, &mut stats, now()).member;
        let cursor_after = stats.next_member_number;

        let downgraded = registrar().upgrade(&master, Tier::Cultivator, &mut stats, now()).member;
        let reupgraded = registrar().upgrade(&downgraded, Tier::Daily, &mut stats, now()).member;

        assert_eq!(stats.next_member_number, cursor_after);
        assert_eq!(reupgraded.member_number, master.member_number);
    }

    // Events

    #[test]
    fn first_daily_upgrade_emits_number_and_tier_events() {
        let mut stats = GlobalStats::launch_baseline(now());
        let member = guest();

        let outcome = registrar().upgrade(&member, Tier::Daily, &mut stats, now());

        let types: Vec<_> = outcome.events.iter().map(|e| e.event_type()).collect();
        assert_eq!(
            types,
            vec![
                "membership.member_number_assigned",
                "membership.tier_changed"
            ]
        );
    }

    #[test]
    fn repeat_upgrade_emits_only_tier_change() {
        let mut stats = GlobalStats::launch_baseline(now());
        let member = guest();
        let daily = registrar().upgrade(&member, Tier::Daily, &mut stats, now()).member;

        let outcome = registrar().upgrade(&daily, Tier::Daily, &mut stats, now());

        assert_eq!(outcome.events.len(), 1);
        assert_eq!(outcome.events[0].event_type(), "membership.tier_changed");
    }

    #[test]
    fn stats_last_updated_refreshed_on_every_upgrade() {
        let start = now();
        let mut stats = GlobalStats::launch_baseline(start);
        let member = guest();

        let later = start.add_days(1);
        registrar().upgrade(&member, Tier::Daily, &mut stats, later);

        assert_eq!(stats.last_updated, later);
    }
}
