//! Grouping, ranking and order stabilisation for the manage-address view

pub mod enrich;
pub mod grouper;
pub mod ranker;
pub mod stable_order;
pub mod types;

pub use enrich::{enrich_accounts, fallback_hd_path_key};
pub use grouper::{group_accounts, GroupedAccounts};
pub use ranker::rank_groups;
pub use stable_order::{AccountGroups, StableOrderCache};
pub use types::{Group, GroupId, GroupKey, KEY_SENTINEL, WATCH_GROUP_NAME};
