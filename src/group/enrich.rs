//! Concurrent hardware enrichment with per-account fallback

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::account::{Account, HdPathInfo, KeyringType};
use crate::controller::WalletController;
use crate::error::ProbeError;

/// Fresh identifier that can never equal a device key or another fallback
pub fn fallback_hd_path_key() -> String {
    Uuid::new_v4().to_string()
}

/// Ask the device behind `keyring` for every account's hd path data.
///
/// All requests run at once and are joined before returning. A failed, timed out
/// or panicked request gives its account a fallback key instead; the output keeps
/// the input order and length.
pub async fn enrich_accounts(
    controller: Arc<dyn WalletController>,
    keyring: KeyringType,
    accounts: Vec<Account>,
    timeout: Duration,
) -> Vec<Account> {
    if accounts.is_empty() {
        return accounts;
    }

    let mut tasks: JoinSet<(usize, Result<HdPathInfo, ProbeError>)> = JoinSet::new();
    for (index, account) in accounts.iter().enumerate() {
        let controller = Arc::clone(&controller);
        let keyring = keyring.clone();
        let address = account.address.clone();
        tasks.spawn(async move {
            let outcome = match tokio::time::timeout(
                timeout,
                controller.request_account_info(keyring, &address),
            )
            .await
            {
                Ok(outcome) => outcome,
                Err(_) => Err(ProbeError::Timeout(timeout.as_millis() as u64)),
            };
            (index, outcome)
        });
    }

    // a task that panics never reports its index, so its slot keeps this
    let mut outcomes: Vec<Result<HdPathInfo, ProbeError>> =
        vec![Err(ProbeError::Aborted("request task did not finish".to_string())); accounts.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => outcomes[index] = outcome,
            Err(e) => warn!("account info task aborted: {}", e),
        }
    }

    accounts
        .into_iter()
        .zip(outcomes)
        .map(|(mut account, outcome)| {
            match outcome {
                Ok(info) => {
                    debug!(address = %account.address, "hd path resolved");
                    account.hd_path_base_public_key = Some(info.hd_path_base_public_key);
                    account.hd_path_type = Some(info.hd_path_type);
                }
                Err(e) => {
                    warn!(address = %account.address, "account info unavailable: {}", e);
                    account.hd_path_base_public_key = Some(fallback_hd_path_key());
                }
            }
            account
        })
        .collect()
}
