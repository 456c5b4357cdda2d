//! Aggregation engine: partition, group, rank and stabilise in one cycle

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::account::{Account, HighlightedAddress, Partition};
use crate::config::EngineConfig;
use crate::controller::WalletController;
use crate::error::ShellResult;
use crate::group::{group_accounts, rank_groups, AccountGroups, Group, GroupId, StableOrderCache};

/// Issued when a cycle starts, handed back when it is published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTicket {
    generation: u64,
}

impl CycleTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Result replaced the exposed groups
    Published,
    /// Cycle failed; the previous groups stay exposed
    Failed,
    /// A newer cycle was already published
    Discarded,
}

/// What the rendering layer reads
#[derive(Debug)]
pub struct EngineView<'a> {
    pub account_group: Option<&'a HashMap<GroupId, Group>>,
    pub order: &'a [GroupId],
    pub loading: bool,
    pub error: Option<&'a str>,
}

/// Run partition, grouping and ranking for one snapshot.
///
/// Touches no engine state; only the enrichment requests suspend.
pub async fn run_cycle(
    controller: Arc<dyn WalletController>,
    probe_timeout: Duration,
    accounts: &[Account],
    highlights: &[HighlightedAddress],
) -> ShellResult<Vec<Group>> {
    let partition = Partition::split(accounts, highlights);
    debug!(
        highlighted = partition.highlighted.len(),
        watch = partition.watch_highlighted.len() + partition.rest_watch.len(),
        total = partition.len(),
        "accounts partitioned"
    );
    let (non_watch, watch) = partition.into_sequences();

    let catalog = controller.get_all_class_accounts().await?;
    let grouped = group_accounts(non_watch, &catalog, controller, probe_timeout).await;
    Ok(rank_groups(grouped, watch))
}

pub struct AggregationEngine {
    controller: Arc<dyn WalletController>,
    config: EngineConfig,
    cache: StableOrderCache,
    current: Option<AccountGroups>,
    error: Option<String>,
    in_flight: usize,
    next_generation: u64,
    published_generation: Option<u64>,
}

impl AggregationEngine {
    pub fn new(controller: Arc<dyn WalletController>, config: EngineConfig) -> Self {
        Self {
            controller,
            config,
            cache: StableOrderCache::new(),
            current: None,
            error: None,
            in_flight: 0,
            next_generation: 0,
            published_generation: None,
        }
    }

    pub fn controller(&self) -> Arc<dyn WalletController> {
        Arc::clone(&self.controller)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn begin_cycle(&mut self) -> CycleTicket {
        let ticket = CycleTicket {
            generation: self.next_generation,
        };
        self.next_generation += 1;
        self.in_flight += 1;
        ticket
    }

    /// Apply a finished cycle. Only here does the order cache change.
    pub fn publish(&mut self, ticket: CycleTicket, outcome: ShellResult<Vec<Group>>) -> PublishOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.config.reject_stale_cycles {
            if let Some(published) = self.published_generation {
                if ticket.generation < published {
                    debug!(
                        generation = ticket.generation,
                        published, "discarding superseded cycle"
                    );
                    return PublishOutcome::Discarded;
                }
            }
        }

        match outcome {
            Ok(ranked) => {
                let groups = self.cache.absorb(ranked);
                info!(
                    generation = ticket.generation,
                    groups = groups.len(),
                    "manage address groups updated"
                );
                self.current = Some(groups);
                self.error = None;
                self.published_generation = Some(ticket.generation);
                PublishOutcome::Published
            }
            Err(e) => {
                error!("manage address: {}", e);
                self.error = Some(e.to_string());
                PublishOutcome::Failed
            }
        }
    }

    /// One full cycle for the given snapshot
    pub async fn compute(
        &mut self,
        accounts: &[Account],
        highlights: &[HighlightedAddress],
    ) -> PublishOutcome {
        let ticket = self.begin_cycle();
        let outcome = run_cycle(
            self.controller(),
            self.config.probe_timeout(),
            accounts,
            highlights,
        )
        .await;
        self.publish(ticket, outcome)
    }

    pub fn result(&self) -> Option<&AccountGroups> {
        self.current.as_ref()
    }

    pub fn account_group(&self) -> Option<&HashMap<GroupId, Group>> {
        self.current.as_ref().map(|groups| &groups.groups_by_key)
    }

    pub fn order(&self) -> &[GroupId] {
        self.cache.order()
    }

    pub fn ordered_groups(&self) -> Vec<&Group> {
        self.current
            .as_ref()
            .map(AccountGroups::ordered)
            .unwrap_or_default()
    }

    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> EngineView<'_> {
        EngineView {
            account_group: self.account_group(),
            order: self.order(),
            loading: self.loading(),
            error: self.error(),
        }
    }
}
