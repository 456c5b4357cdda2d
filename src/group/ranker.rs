//! Total display order over grouped accounts

use super::grouper::GroupedAccounts;
use super::types::Group;
use crate::account::{Account, DEFAULT_RANK};

/// A block ranks as its first group. An empty block never reaches the output.
fn block_rank(block: &[Group]) -> u64 {
    block.first().map(Group::rank).unwrap_or(DEFAULT_RANK)
}

/// Order grouped accounts for display.
///
/// Every other-cluster group is its own block; seed phrase and ledger groups move as
/// one block each. Blocks are stable-sorted by rank, so equal ranks keep emission
/// order: other clusters, then seed phrase, then ledger. A non-empty `watch` list
/// becomes a trailing "Watch Address" group.
pub fn rank_groups(grouped: GroupedAccounts, watch: Vec<Account>) -> Vec<Group> {
    let mut blocks: Vec<Vec<Group>> = grouped.others.into_iter().map(|g| vec![g]).collect();
    blocks.push(grouped.seed_phrase);
    blocks.push(grouped.ledger);

    blocks.sort_by_key(|block| block_rank(block));

    let mut ranked: Vec<Group> = blocks.into_iter().flatten().collect();
    if !watch.is_empty() {
        ranked.push(Group::watch(watch));
    }
    ranked
}
