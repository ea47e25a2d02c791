//! Command and query handlers, one per use case.

mod check_limit;
mod create_resource;
mod delete_resource;
mod get_global_stats;
mod get_member;
mod record_ai_request;
mod register_guest;
mod upgrade_tier;

pub use check_limit::{CheckLimitHandler, CheckLimitQuery};
pub use create_resource::{CreateResourceCommand, CreateResourceHandler, CreateResourceResult};
pub use delete_resource::{DeleteResourceCommand, DeleteResourceHandler};
pub use get_global_stats::{GetGlobalStatsHandler, GetGlobalStatsQuery};
pub use get_member::{GetMemberHandler, GetMemberQuery, MemberView};
pub use record_ai_request::{RecordAiRequestCommand, RecordAiRequestHandler, RecordAiRequestResult};
pub use register_guest::{RegisterGuestCommand, RegisterGuestHandler};
pub use upgrade_tier::{UpgradeTierCommand, UpgradeTierHandler, UpgradeTierResult};
