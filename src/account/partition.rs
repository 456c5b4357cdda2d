//! Highlight / watch-mode partitioning of the account list

use super::types::{sort_accounts_by_balance, Account, HighlightedAddress};

/// The four disjoint subsets of one account snapshot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    pub highlighted: Vec<Account>,
    pub watch_highlighted: Vec<Account>,
    pub rest_non_watch: Vec<Account>,
    pub rest_watch: Vec<Account>,
}

impl Partition {
    /// Pull pinned accounts to the front of their partition.
    ///
    /// Each pinned entry claims at most one account (the first one matching address
    /// and brand). Pinned accounts end up sorted by descending balance, the rest keep
    /// their input order.
    pub fn split(accounts: &[Account], highlights: &[HighlightedAddress]) -> Self {
        let mut rest: Vec<Account> = accounts.to_vec();
        let mut partition = Partition::default();

        for highlighted in highlights {
            if let Some(idx) = rest.iter().position(|a| a.matches(highlighted)) {
                let account = rest.remove(idx);
                if account.is_watch() {
                    partition.watch_highlighted.push(account);
                } else {
                    partition.highlighted.push(account);
                }
            }
        }

        let (rest_watch, rest_non_watch): (Vec<Account>, Vec<Account>) =
            rest.into_iter().partition(|a| a.is_watch());
        partition.rest_watch = rest_watch;
        partition.rest_non_watch = rest_non_watch;

        sort_accounts_by_balance(&mut partition.highlighted);
        sort_accounts_by_balance(&mut partition.watch_highlighted);
        partition
    }

    pub fn len(&self) -> usize {
        self.highlighted.len()
            + self.watch_highlighted.len()
            + self.rest_non_watch.len()
            + self.rest_watch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(highlighted ++ rest_non_watch, watch_highlighted ++ rest_watch)`
    pub fn into_sequences(self) -> (Vec<Account>, Vec<Account>) {
        let mut non_watch = self.highlighted;
        non_watch.extend(self.rest_non_watch);
        let mut watch = self.watch_highlighted;
        watch.extend(self.rest_watch);
        (non_watch, watch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::types::KeyringType;
    use rust_decimal::Decimal;

    fn simple(address: &str, balance: i64) -> Account {
        Account::new(address, KeyringType::SimpleKey).with_balance(Decimal::from(balance))
    }

    fn watch(address: &str, balance: i64) -> Account {
        Account::new(address, KeyringType::Watch).with_balance(Decimal::from(balance))
    }

    fn addresses(accounts: &[Account]) -> Vec<&str> {
        accounts.iter().map(|a| a.address.as_str()).collect()
    }

    #[test]
    fn test_partition_is_complete() {
        let accounts = vec![
            simple("0x1", 1),
            watch("0x2", 2),
            simple("0x3", 3),
            watch("0x4", 4),
            simple("0x5", 5),
        ];
        let highlights = vec![
            HighlightedAddress::of(&accounts[2]),
            HighlightedAddress::of(&accounts[3]),
            HighlightedAddress::new("0xmissing", None),
        ];

        let partition = Partition::split(&accounts, &highlights);
        assert_eq!(partition.len(), accounts.len());
        assert_eq!(addresses(&partition.highlighted), vec!["0x3"]);
        assert_eq!(addresses(&partition.watch_highlighted), vec!["0x4"]);
        assert_eq!(addresses(&partition.rest_non_watch), vec!["0x1", "0x5"]);
        assert_eq!(addresses(&partition.rest_watch), vec!["0x2"]);

        let mut seen = addresses(&partition.highlighted);
        seen.extend(addresses(&partition.watch_highlighted));
        seen.extend(addresses(&partition.rest_non_watch));
        seen.extend(addresses(&partition.rest_watch));
        seen.sort();
        assert_eq!(seen, vec!["0x1", "0x2", "0x3", "0x4", "0x5"]);
    }

    #[test]
    fn test_highlighted_first_by_balance() {
        let accounts = vec![
            simple("0xa", 5),
            simple("0xb", 1),
            simple("0xc", 9),
            watch("0xw1", 1),
            watch("0xw2", 7),
        ];
        let highlights = vec![
            HighlightedAddress::of(&accounts[1]),
            HighlightedAddress::of(&accounts[2]),
            HighlightedAddress::of(&accounts[3]),
            HighlightedAddress::of(&accounts[4]),
        ];

        let (non_watch, watch) = Partition::split(&accounts, &highlights).into_sequences();
        assert_eq!(addresses(&non_watch), vec!["0xc", "0xb", "0xa"]);
        assert_eq!(addresses(&watch), vec!["0xw2", "0xw1"]);
    }

    #[test]
    fn test_duplicate_address_claims_first_match_only() {
        let accounts = vec![simple("0xa", 1), simple("0xa", 2)];
        let highlights = vec![HighlightedAddress::of(&accounts[0])];

        let partition = Partition::split(&accounts, &highlights);
        assert_eq!(partition.highlighted.len(), 1);
        assert_eq!(partition.highlighted[0].balance, Decimal::from(1));
        assert_eq!(partition.rest_non_watch.len(), 1);
    }

    #[test]
    fn test_brand_mismatch_is_not_highlighted() {
        let accounts = vec![simple("0xa", 1)];
        let highlights = vec![HighlightedAddress::new("0xa", Some("MetaMask"))];

        let partition = Partition::split(&accounts, &highlights);
        assert!(partition.highlighted.is_empty());
        assert_eq!(partition.rest_non_watch.len(), 1);
    }
}
