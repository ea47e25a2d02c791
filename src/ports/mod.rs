//! Ports - trait boundaries between the domain and infrastructure.

mod member_repository;
mod stats_store;

pub use member_repository::MemberRepository;
pub use stats_store::{GlobalStatsStore, VersionedStats};
