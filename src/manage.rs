//! Manage-address view model: ties the account and highlight providers to the engine

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

use crate::account::{Account, HighlightSet, HighlightedAddress};
use crate::config::EngineConfig;
use crate::controller::{AccountSource, HighlightStore, WalletController};
use crate::engine::{AggregationEngine, PublishOutcome};
use crate::error::ShellResult;
use crate::group::{Group, GroupId};

pub struct ManageAddress {
    engine: AggregationEngine,
    accounts: Arc<dyn AccountSource>,
    highlights: Arc<dyn HighlightStore>,
    accounts_list: Vec<Account>,
    highlighted_addresses: HighlightSet,
}

impl ManageAddress {
    pub fn new(
        controller: Arc<dyn WalletController>,
        accounts: Arc<dyn AccountSource>,
        highlights: Arc<dyn HighlightStore>,
        config: EngineConfig,
    ) -> Self {
        Self {
            engine: AggregationEngine::new(controller, config),
            accounts,
            highlights,
            accounts_list: Vec::new(),
            highlighted_addresses: Vec::new(),
        }
    }

    /// Pins first, then accounts, then one aggregation cycle
    pub async fn initialize(&mut self) -> ShellResult<PublishOutcome> {
        self.refresh_highlighted_addresses().await?;
        self.get_all_accounts_to_display().await
    }

    pub async fn refresh_highlighted_addresses(&mut self) -> ShellResult<()> {
        match self.highlights.get_highlighted_addresses().await {
            Ok(highlighted) => {
                self.highlighted_addresses = highlighted;
                Ok(())
            }
            Err(e) => {
                error!("manage address: highlighted addresses unavailable: {}", e);
                Err(e)
            }
        }
    }

    /// Reload the account list and recompute the groups
    pub async fn get_all_accounts_to_display(&mut self) -> ShellResult<PublishOutcome> {
        match self.accounts.get_all_accounts_to_display().await {
            Ok(accounts) => {
                info!("loaded {} accounts to display", accounts.len());
                self.accounts_list = accounts;
                Ok(self.recompute().await)
            }
            Err(e) => {
                error!("manage address: account list unavailable: {}", e);
                Err(e)
            }
        }
    }

    /// Unpin an account, then regroup with the updated pins
    pub async fn remove_address(
        &mut self,
        address: &str,
        brand_name: Option<&str>,
    ) -> ShellResult<PublishOutcome> {
        self.highlights.remove_address(address, brand_name).await?;
        self.refresh_highlighted_addresses().await?;
        Ok(self.recompute().await)
    }

    pub async fn recompute(&mut self) -> PublishOutcome {
        self.engine
            .compute(&self.accounts_list, &self.highlighted_addresses)
            .await
    }

    pub fn account_group(&self) -> Option<&HashMap<GroupId, Group>> {
        self.engine.account_group()
    }

    pub fn ordered_groups(&self) -> Vec<&Group> {
        self.engine.ordered_groups()
    }

    /// True while an aggregation cycle is begun but not yet published
    pub fn loading(&self) -> bool {
        self.engine.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.engine.error()
    }

    pub fn highlighted_addresses(&self) -> &[HighlightedAddress] {
        &self.highlighted_addresses
    }

    pub fn accounts_list(&self) -> &[Account] {
        &self.accounts_list
    }

    pub fn engine(&self) -> &AggregationEngine {
        &self.engine
    }
}
