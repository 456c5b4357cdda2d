//! Wallet accounts as the manage-address view sees them
//!
//! - Account snapshots, keyring kinds and pinned entries
//! - Brand catalog with display names and ranks
//! - Highlight / watch-mode partitioning

pub mod brand;
pub mod partition;
pub mod types;

pub use brand::{wallet_type_name, Brand, BrandCategory, DEFAULT_RANK};
pub use partition::Partition;
pub use types::{
    sort_accounts_by_balance, Account, ClassAccounts, HdPathInfo, HighlightSet,
    HighlightedAddress, KeyringType,
};
