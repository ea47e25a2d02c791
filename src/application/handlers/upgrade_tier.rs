//! UpgradeTierHandler - Command handler for tier changes.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{ErrorCode, Timestamp, UserId};
use crate::domain::membership::{
    Member, MembershipError, MembershipEvent, Registrar, Tier,
};
use crate::ports::{GlobalStatsStore, MemberRepository};

/// How many times a conflicting stats commit is retried from a fresh load.
const MAX_COMMIT_ATTEMPTS: u32 = 3;

/// Command to change a member's tier.
#[derive(Debug, Clone)]
pub struct UpgradeTierCommand {
    pub user_id: UserId,
    pub target_tier: Tier,
}

/// Result of a tier change.
#[derive(Debug, Clone)]
pub struct UpgradeTierResult {
    /// The member after the tier change.
    pub member: Member,
    /// Welcome message for display.
    pub message: String,
    /// Events emitted by the registrar.
    pub events: Vec<MembershipEvent>,
}

/// Handler that runs the registrar inside the stats store's transaction
/// boundary.
///
/// The stats are loaded with their version, the registrar applies the
/// upgrade to a working copy, and the commit is validated against the
/// loaded version. A conflicting commit discards the working copy and
/// retries from a fresh load, so issued numbers are never double-assigned
/// and never leak. The member record is persisted only after the stats
/// commit succeeds.
pub struct UpgradeTierHandler {
    members: Arc<dyn MemberRepository>,
    stats: Arc<dyn GlobalStatsStore>,
    registrar: Registrar,
}

impl UpgradeTierHandler {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        stats: Arc<dyn GlobalStatsStore>,
        registrar: Registrar,
    ) -> Self {
        Self {
            members,
            stats,
            registrar,
        }
    }

    pub async fn handle(&self, cmd: UpgradeTierCommand) -> Result<UpgradeTierResult, MembershipError> {
        let member = self
            .members
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| MembershipError::not_found(cmd.user_id.clone()))?;

        let now = Timestamp::now();

        let mut attempts = 0;
        let outcome = loop {
            attempts += 1;

            let versioned = self.stats.load().await?;
            let mut working = versioned.stats;
            let outcome = self.registrar.upgrade(&member, cmd.target_tier, &mut working, now);

            match self.stats.commit(working, versioned.version).await {
                Ok(()) => break outcome,
                Err(err) if err.code == ErrorCode::VersionConflict => {
                    if attempts >= MAX_COMMIT_ATTEMPTS {
                        warn!(
                            user_id = %cmd.user_id,
                            attempts,
                            "giving up on tier upgrade after repeated stats conflicts"
                        );
                        return Err(MembershipError::stats_conflict(attempts));
                    }
                    warn!(user_id = %cmd.user_id, attempts, "stats commit conflicted, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        };

        self.members.update(&outcome.member).await?;

        info!(
            user_id = %cmd.user_id,
            target_tier = %cmd.target_tier.display_name(),
            member_number = ?outcome.member.member_number,
            master_number = ?outcome.member.master_number,
            "tier change applied"
        );

        Ok(UpgradeTierResult {
            member: outcome.member,
            message: outcome.message,
            events: outcome.events,
        })
    }
}
