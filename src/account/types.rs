//! Account type definitions for the manage-address view

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyring that custodies an account.
///
/// Serialised as the wallet-facing label (`"HD Key Tree"`, `"Ledger Hardware"`, ...).
/// Labels the shell does not know survive a round trip through `Other`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum KeyringType {
    SimpleKey,
    HdKeyTree,
    Ledger,
    Trezor,
    OneKey,
    GridPlus,
    Keystone,
    BitBox02,
    Imkey,
    WalletConnect,
    Gnosis,
    CoboArgus,
    Coinbase,
    Watch,
    Other(String),
}

impl KeyringType {
    pub fn as_str(&self) -> &str {
        match self {
            KeyringType::SimpleKey => "Simple Key Pair",
            KeyringType::HdKeyTree => "HD Key Tree",
            KeyringType::Ledger => "Ledger Hardware",
            KeyringType::Trezor => "Trezor Hardware",
            KeyringType::OneKey => "Onekey Hardware",
            KeyringType::GridPlus => "GridPlus Hardware",
            KeyringType::Keystone => "QR Hardware",
            KeyringType::BitBox02 => "BitBox02 Hardware",
            KeyringType::Imkey => "Imkey Hardware",
            KeyringType::WalletConnect => "WalletConnect",
            KeyringType::Gnosis => "Gnosis",
            KeyringType::CoboArgus => "CoboArgus",
            KeyringType::Coinbase => "Coinbase",
            KeyringType::Watch => "Watch Address",
            KeyringType::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Simple Key Pair" => KeyringType::SimpleKey,
            "HD Key Tree" => KeyringType::HdKeyTree,
            "Ledger Hardware" => KeyringType::Ledger,
            "Trezor Hardware" => KeyringType::Trezor,
            "Onekey Hardware" => KeyringType::OneKey,
            "GridPlus Hardware" => KeyringType::GridPlus,
            "QR Hardware" => KeyringType::Keystone,
            "BitBox02 Hardware" => KeyringType::BitBox02,
            "Imkey Hardware" => KeyringType::Imkey,
            "WalletConnect" => KeyringType::WalletConnect,
            "Gnosis" => KeyringType::Gnosis,
            "CoboArgus" => KeyringType::CoboArgus,
            "Coinbase" => KeyringType::Coinbase,
            "Watch Address" => KeyringType::Watch,
            other => KeyringType::Other(other.to_string()),
        }
    }

    pub fn is_watch(&self) -> bool {
        matches!(self, KeyringType::Watch)
    }
}

impl From<String> for KeyringType {
    fn from(label: String) -> Self {
        KeyringType::from_label(&label)
    }
}

impl From<KeyringType> for String {
    fn from(keyring: KeyringType) -> Self {
        keyring.as_str().to_string()
    }
}

impl fmt::Display for KeyringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One displayed account, as handed over by the wallet backend
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    #[serde(rename = "type")]
    pub keyring_type: KeyringType,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    // Only known for hardware accounts, after the device answered
    #[serde(default)]
    pub hd_path_base_public_key: Option<String>,
    #[serde(default)]
    pub hd_path_type: Option<String>,
    #[serde(default)]
    pub balance: Decimal,
}

impl Account {
    pub fn new(address: &str, keyring_type: KeyringType) -> Self {
        Self {
            address: address.to_string(),
            brand_name: Some(keyring_type.as_str().to_string()),
            keyring_type,
            public_key: None,
            hd_path_base_public_key: None,
            hd_path_type: None,
            balance: Decimal::ZERO,
        }
    }

    pub fn with_brand(mut self, brand_name: &str) -> Self {
        self.brand_name = Some(brand_name.to_string());
        self
    }

    pub fn with_public_key(mut self, public_key: &str) -> Self {
        self.public_key = Some(public_key.to_string());
        self
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    /// Label the grouper clusters on: the brand, else the keyring type
    pub fn cluster_label(&self) -> &str {
        self.brand_name
            .as_deref()
            .unwrap_or_else(|| self.keyring_type.as_str())
    }

    pub fn is_watch(&self) -> bool {
        self.keyring_type.is_watch()
    }

    /// Same identity as a pinned entry
    pub fn matches(&self, highlighted: &HighlightedAddress) -> bool {
        self.address == highlighted.address && self.brand_name == highlighted.brand_name
    }
}

/// A pinned account, identified by address and brand
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedAddress {
    pub address: String,
    #[serde(default)]
    pub brand_name: Option<String>,
}

impl HighlightedAddress {
    pub fn new(address: &str, brand_name: Option<&str>) -> Self {
        Self {
            address: address.to_string(),
            brand_name: brand_name.map(str::to_string),
        }
    }

    pub fn of(account: &Account) -> Self {
        Self {
            address: account.address.clone(),
            brand_name: account.brand_name.clone(),
        }
    }
}

/// Pinned entries in the order the store returns them
pub type HighlightSet = Vec<HighlightedAddress>;

/// One keyring of the backend catalog, including keyrings with no accounts
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassAccounts {
    #[serde(rename = "type")]
    pub keyring_type: KeyringType,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl ClassAccounts {
    pub fn is_empty_seed_phrase(&self) -> bool {
        self.keyring_type == KeyringType::HdKeyTree && self.accounts.is_empty()
    }
}

/// Device-derived grouping data returned by `getAccountInfo`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HdPathInfo {
    pub hd_path_base_public_key: String,
    pub hd_path_type: String,
}

/// Descending balance; equal balances keep their relative order
pub fn sort_accounts_by_balance(accounts: &mut [Account]) {
    accounts.sort_by(|a, b| b.balance.cmp(&a.balance));
}
