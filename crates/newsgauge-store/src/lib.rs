//! Per-query result storage, recent-query history, and derived views.

mod history;
mod profile;
mod stats;
mod store;

pub use history::{RecentQueryList, touch_history};
pub use profile::SourceProfile;
pub use stats::Statistics;
pub use store::QueryResultStore;
