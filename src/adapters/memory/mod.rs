//! In-memory adapter implementations.
//!
//! Thread-safe, non-persistent implementations of the ports. Suitable for
//! the single-tab embedding the app currently runs in, and for tests.

mod member_store;
mod stats_store;

pub use member_store::InMemoryMemberStore;
pub use stats_store::InMemoryStatsStore;
