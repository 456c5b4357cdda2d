//! Clusters non-watch accounts into display groups

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::enrich::enrich_accounts;
use super::types::Group;
use crate::account::{Account, ClassAccounts, KeyringType};
use crate::controller::WalletController;

/// Grouper output, kept in blocks so the ranker can order them as units
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupedAccounts {
    /// One group per remaining cluster, in first-appearance order
    pub others: Vec<Group>,
    /// Seed phrase groups, placeholders included, largest first
    pub seed_phrase: Vec<Group>,
    /// Ledger groups by device key, largest first
    pub ledger: Vec<Group>,
}

impl GroupedAccounts {
    pub fn group_count(&self) -> usize {
        self.others.len() + self.seed_phrase.len() + self.ledger.len()
    }

    pub fn account_count(&self) -> usize {
        self.others
            .iter()
            .chain(&self.seed_phrase)
            .chain(&self.ledger)
            .map(Group::len)
            .sum()
    }
}

/// Stable grouping: keys in first-appearance order, members in input order
pub fn cluster_by<K, F>(accounts: Vec<Account>, mut key: F) -> Vec<(K, Vec<Account>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&Account) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut clusters: Vec<(K, Vec<Account>)> = Vec::new();
    for account in accounts {
        let k = key(&account);
        match index.get(&k) {
            Some(&slot) => clusters[slot].1.push(account),
            None => {
                index.insert(k.clone(), clusters.len());
                clusters.push((k, vec![account]));
            }
        }
    }
    clusters
}

/// Seed phrase groups by public key, plus one placeholder per empty seed phrase keyring.
///
/// The catalog may be older than `accounts`; a keyring it lists as empty but that
/// already has live accounts gets no placeholder.
pub fn group_seed_phrase(accounts: Vec<Account>, catalog: &[ClassAccounts]) -> Vec<Group> {
    let mut groups: Vec<Group> = cluster_by(accounts, |a| a.public_key.clone())
        .into_iter()
        .filter_map(|(_, members)| Group::from_members(members))
        .collect();

    let live: HashSet<Option<String>> = groups.iter().map(|g| g.public_key.clone()).collect();
    groups.extend(
        catalog
            .iter()
            .filter(|keyring| keyring.is_empty_seed_phrase())
            .filter(|keyring| {
                let stale = live.contains(&keyring.public_key);
                if stale {
                    debug!(public_key = ?keyring.public_key, "keyring has live accounts, no placeholder");
                }
                !stale
            })
            .map(Group::placeholder),
    );

    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    groups
}

/// Hardware groups by device key, largest first. Expects enriched accounts.
pub fn group_by_hd_path(accounts: Vec<Account>) -> Vec<Group> {
    let mut clusters = cluster_by(accounts, |a| a.hd_path_base_public_key.clone());
    clusters.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    clusters
        .into_iter()
        .filter_map(|(_, members)| Group::from_members(members))
        .collect()
}

/// Group the non-watch sequence. Ledger members are enriched through `controller`.
pub async fn group_accounts(
    non_watch: Vec<Account>,
    catalog: &[ClassAccounts],
    controller: Arc<dyn WalletController>,
    probe_timeout: Duration,
) -> GroupedAccounts {
    let mut grouped = GroupedAccounts::default();
    let mut seed_phrase = Vec::new();
    let mut ledger = Vec::new();

    for (label, members) in cluster_by(non_watch, |a| a.cluster_label().to_string()) {
        match KeyringType::from_label(&label) {
            KeyringType::HdKeyTree => seed_phrase = members,
            KeyringType::Ledger => ledger = members,
            _ => grouped.others.extend(Group::from_members(members)),
        }
    }

    grouped.seed_phrase = group_seed_phrase(seed_phrase, catalog);

    let enriched = enrich_accounts(controller, KeyringType::Ledger, ledger, probe_timeout).await;
    grouped.ledger = group_by_hd_path(enriched);

    grouped
}
