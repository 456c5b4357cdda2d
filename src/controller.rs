//! Capabilities the manage-address engine consumes from the wallet backend

use async_trait::async_trait;

use crate::account::{Account, ClassAccounts, HdPathInfo, HighlightSet, KeyringType};
use crate::error::{ProbeError, ShellResult};

#[async_trait]
pub trait WalletController: Send + Sync {
    /// Full keyring catalog, keyrings without accounts included
    async fn get_all_class_accounts(&self) -> ShellResult<Vec<ClassAccounts>>;

    /// `requestKeyring(keyring, "getAccountInfo", null, address)`
    async fn request_account_info(
        &self,
        keyring: KeyringType,
        address: &str,
    ) -> Result<HdPathInfo, ProbeError>;
}

#[async_trait]
pub trait AccountSource: Send + Sync {
    async fn get_all_accounts_to_display(&self) -> ShellResult<Vec<Account>>;
}

#[async_trait]
pub trait HighlightStore: Send + Sync {
    async fn get_highlighted_addresses(&self) -> ShellResult<HighlightSet>;

    async fn remove_address(&self, address: &str, brand_name: Option<&str>) -> ShellResult<()>;
}
