//! Display groups and their identity keys

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::account::{wallet_type_name, Account, Brand, ClassAccounts, KeyringType};

/// Composite identity key of a group, as used for lookup and ordering
pub type GroupId = String;

/// Stand-in for an absent identity field
pub const KEY_SENTINEL: &str = "-";

pub const WATCH_GROUP_NAME: &str = "Watch Address";

/// `(keyringType, brandName, hdPathBasePublicKey, publicKey)`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub keyring_type: KeyringType,
    pub brand_name: Option<String>,
    pub hd_path_base_public_key: Option<String>,
    pub public_key: Option<String>,
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.keyring_type,
            self.brand_name.as_deref().unwrap_or(KEY_SENTINEL),
            self.hd_path_base_public_key.as_deref().unwrap_or(KEY_SENTINEL),
            self.public_key.as_deref().unwrap_or(KEY_SENTINEL),
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    #[serde(rename = "type")]
    pub keyring_type: KeyringType,
    pub brand_name: Option<String>,
    pub public_key: Option<String>,
    pub hd_path_base_public_key: Option<String>,
    pub hd_path_type: Option<String>,
    pub members: Vec<Account>,
}

impl Group {
    /// Group described by its first member. `None` for an empty list.
    pub fn from_members(members: Vec<Account>) -> Option<Self> {
        let first = members.first()?;
        Some(Self {
            name: wallet_type_name(first.cluster_label()),
            keyring_type: first.keyring_type.clone(),
            brand_name: first.brand_name.clone(),
            public_key: first.public_key.clone(),
            hd_path_base_public_key: first.hd_path_base_public_key.clone(),
            hd_path_type: first.hd_path_type.clone(),
            members,
        })
    }

    /// Empty group standing for a seed phrase keyring with no derived accounts
    pub fn placeholder(keyring: &ClassAccounts) -> Self {
        Self {
            name: wallet_type_name(keyring.keyring_type.as_str()),
            keyring_type: keyring.keyring_type.clone(),
            brand_name: Some(keyring.keyring_type.as_str().to_string()),
            public_key: keyring.public_key.clone(),
            hd_path_base_public_key: None,
            hd_path_type: None,
            members: Vec::new(),
        }
    }

    pub fn watch(members: Vec<Account>) -> Self {
        Self {
            name: WATCH_GROUP_NAME.to_string(),
            keyring_type: KeyringType::Watch,
            brand_name: None,
            public_key: None,
            hd_path_base_public_key: None,
            hd_path_type: None,
            members,
        }
    }

    pub fn key(&self) -> GroupKey {
        GroupKey {
            keyring_type: self.keyring_type.clone(),
            brand_name: self.brand_name.clone(),
            hd_path_base_public_key: self.hd_path_base_public_key.clone(),
            public_key: self.public_key.clone(),
        }
    }

    pub fn id(&self) -> GroupId {
        self.key().to_string()
    }

    pub fn is_placeholder(&self) -> bool {
        self.members.is_empty()
    }

    pub fn brand(&self) -> Brand {
        let label = self
            .brand_name
            .as_deref()
            .unwrap_or_else(|| self.keyring_type.as_str());
        Brand::from_label(label)
    }

    pub fn rank(&self) -> u64 {
        self.brand().rank()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
