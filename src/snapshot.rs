//! JSON-backed wallet that serves accounts, pins and device answers from memory

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::account::{Account, ClassAccounts, HdPathInfo, HighlightSet, KeyringType};
use crate::controller::{AccountSource, HighlightStore, WalletController};
use crate::error::{ProbeError, ShellError, ShellResult};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub highlighted: HighlightSet,
    /// Keyring catalog; empty keyrings only appear here
    #[serde(default)]
    pub keyrings: Vec<ClassAccounts>,
    /// Device answers per address; a missing address behaves as a disconnected device
    #[serde(default)]
    pub devices: HashMap<String, HdPathInfo>,
}

impl WalletSnapshot {
    pub fn load(path: &str) -> ShellResult<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, path: &str) -> ShellResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SnapshotWallet {
    state: RwLock<WalletSnapshot>,
    probe_delays: RwLock<HashMap<String, Duration>>,
    catalog_error: RwLock<Option<String>>,
    accounts_error: RwLock<Option<String>>,
}

impl SnapshotWallet {
    pub fn new(snapshot: WalletSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
            probe_delays: RwLock::new(HashMap::new()),
            catalog_error: RwLock::new(None),
            accounts_error: RwLock::new(None),
        }
    }

    pub fn load(path: &str) -> ShellResult<Self> {
        Ok(Self::new(WalletSnapshot::load(path)?))
    }

    pub async fn snapshot(&self) -> WalletSnapshot {
        self.state.read().await.clone()
    }

    pub async fn set_accounts(&self, accounts: Vec<Account>) {
        self.state.write().await.accounts = accounts;
    }

    pub async fn set_highlighted(&self, highlighted: HighlightSet) {
        self.state.write().await.highlighted = highlighted;
    }

    pub async fn connect_device(&self, address: &str, info: HdPathInfo) {
        self.state.write().await.devices.insert(address.to_string(), info);
    }

    pub async fn disconnect_device(&self, address: &str) {
        self.state.write().await.devices.remove(address);
    }

    pub async fn delay_probe(&self, address: &str, delay: Duration) {
        self.probe_delays.write().await.insert(address.to_string(), delay);
    }

    pub async fn fail_catalog(&self, reason: Option<&str>) {
        *self.catalog_error.write().await = reason.map(str::to_string);
    }

    pub async fn fail_accounts(&self, reason: Option<&str>) {
        *self.accounts_error.write().await = reason.map(str::to_string);
    }
}

#[async_trait]
impl WalletController for SnapshotWallet {
    async fn get_all_class_accounts(&self) -> ShellResult<Vec<ClassAccounts>> {
        if let Some(reason) = self.catalog_error.read().await.clone() {
            return Err(ShellError::CatalogError(reason));
        }
        Ok(self.state.read().await.keyrings.clone())
    }

    async fn request_account_info(
        &self,
        keyring: KeyringType,
        address: &str,
    ) -> Result<HdPathInfo, ProbeError> {
        if keyring != KeyringType::Ledger {
            return Err(ProbeError::Unsupported(keyring.to_string()));
        }
        let delay = self.probe_delays.read().await.get(address).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.state
            .read()
            .await
            .devices
            .get(address)
            .cloned()
            .ok_or(ProbeError::Disconnected)
    }
}

#[async_trait]
impl AccountSource for SnapshotWallet {
    async fn get_all_accounts_to_display(&self) -> ShellResult<Vec<Account>> {
        if let Some(reason) = self.accounts_error.read().await.clone() {
            return Err(ShellError::AccountSourceError(reason));
        }
        Ok(self.state.read().await.accounts.clone())
    }
}

#[async_trait]
impl HighlightStore for SnapshotWallet {
    async fn get_highlighted_addresses(&self) -> ShellResult<HighlightSet> {
        Ok(self.state.read().await.highlighted.clone())
    }

    async fn remove_address(&self, address: &str, brand_name: Option<&str>) -> ShellResult<()> {
        let mut state = self.state.write().await;
        let before = state.highlighted.len();
        state
            .highlighted
            .retain(|h| !(h.address == address && h.brand_name.as_deref() == brand_name));
        if state.highlighted.len() == before {
            return Err(ShellError::HighlightError(format!(
                "{} ({}) is not pinned",
                address,
                brand_name.unwrap_or("-")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::HighlightedAddress;

    const SNAPSHOT: &str = r#"{
        "accounts": [
            {"address": "0xa", "type": "Simple Key Pair", "brandName": "Simple Key Pair", "balance": 3.5},
            {"address": "0xl", "type": "Ledger Hardware", "brandName": "Ledger Hardware"}
        ],
        "highlighted": [{"address": "0xa", "brandName": "Simple Key Pair"}],
        "keyrings": [{"type": "HD Key Tree", "publicKey": "pk0", "accounts": []}],
        "devices": {"0xl": {"hdPathBasePublicKey": "dev", "hdPathType": "LedgerLive"}}
    }"#;

    fn wallet() -> SnapshotWallet {
        SnapshotWallet::new(serde_json::from_str(SNAPSHOT).unwrap())
    }

    #[tokio::test]
    async fn test_serves_snapshot() {
        let wallet = wallet();
        let accounts = wallet.get_all_accounts_to_display().await.unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].balance.to_string(), "3.5");

        let keyrings = wallet.get_all_class_accounts().await.unwrap();
        assert!(keyrings[0].is_empty_seed_phrase());

        let info = wallet.request_account_info(KeyringType::Ledger, "0xl").await.unwrap();
        assert_eq!(info.hd_path_base_public_key, "dev");
        assert_eq!(
            wallet.request_account_info(KeyringType::Ledger, "0xa").await,
            Err(ProbeError::Disconnected)
        );
        assert!(matches!(
            wallet.request_account_info(KeyringType::Trezor, "0xl").await,
            Err(ProbeError::Unsupported(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_address_needs_matching_brand() {
        let wallet = wallet();
        assert!(matches!(
            wallet.remove_address("0xa", Some("MetaMask")).await,
            Err(ShellError::HighlightError(_))
        ));
        assert_eq!(wallet.get_highlighted_addresses().await.unwrap().len(), 1);

        wallet.remove_address("0xa", Some("Simple Key Pair")).await.unwrap();
        assert!(wallet.get_highlighted_addresses().await.unwrap().is_empty());

        wallet
            .set_highlighted(vec![HighlightedAddress::new("0xl", Some("Ledger Hardware"))])
            .await;
        assert_eq!(wallet.snapshot().await.highlighted.len(), 1);
    }

    #[tokio::test]
    async fn test_catalog_failure() {
        let wallet = wallet();
        wallet.fail_catalog(Some("ipc closed")).await;
        assert!(matches!(
            wallet.get_all_class_accounts().await,
            Err(ShellError::CatalogError(_))
        ));
        wallet.fail_catalog(None).await;
        assert!(wallet.get_all_class_accounts().await.is_ok());
    }

    #[tokio::test]
    async fn test_account_source_failure() {
        let wallet = wallet();
        wallet.fail_accounts(Some("store locked")).await;
        assert!(matches!(
            wallet.get_all_accounts_to_display().await,
            Err(ShellError::AccountSourceError(_))
        ));
        wallet.fail_accounts(None).await;
        assert_eq!(wallet.get_all_accounts_to_display().await.unwrap().len(), 2);
    }

    #[test]
    fn test_save_and_load() {
        let snapshot: WalletSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        let path = std::env::temp_dir().join(format!("snapshot-{}.json", uuid::Uuid::new_v4()));
        let path = path.to_string_lossy().to_string();

        snapshot.save(&path).unwrap();
        let loaded = WalletSnapshot::load(&path).unwrap();
        assert_eq!(loaded.accounts, snapshot.accounts);
        assert_eq!(loaded.devices.len(), 1);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(WalletSnapshot::load(&path), Err(ShellError::SnapshotIo(_))));
    }
}
