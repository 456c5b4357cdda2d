use clap::Subcommand;
use std::sync::Arc;
use tracing::info;

use crate::config::EngineConfig;
use crate::engine::PublishOutcome;
use crate::error::{ShellError, ShellResult};
use crate::group::Group;
use crate::manage::ManageAddress;
use crate::snapshot::SnapshotWallet;

#[derive(Subcommand)]
pub enum AddressCommands {
    /// Show the grouped address list of a wallet snapshot
    List {
        #[arg(long)]
        snapshot: String,
        /// Print groups as JSON
        #[arg(long)]
        json: bool,
    },
    /// Unpin an address and show the regrouped list
    Unpin {
        #[arg(long)]
        snapshot: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

pub async fn handle_address_command(cmd: AddressCommands, config: EngineConfig) -> ShellResult<()> {
    match cmd {
        AddressCommands::List { snapshot, json } => {
            let wallet = Arc::new(SnapshotWallet::load(&snapshot)?);
            let mut manage = open(&wallet, config);
            ensure_published(manage.initialize().await?, &manage)?;
            print_groups(&manage.ordered_groups(), json)
        }
        AddressCommands::Unpin {
            snapshot,
            address,
            brand,
            json,
        } => {
            let wallet = Arc::new(SnapshotWallet::load(&snapshot)?);
            let mut manage = open(&wallet, config);
            manage.initialize().await?;
            let outcome = manage.remove_address(&address, brand.as_deref()).await?;
            ensure_published(outcome, &manage)?;

            wallet.snapshot().await.save(&snapshot)?;
            info!("Unpinned {} in {}", address, snapshot);
            print_groups(&manage.ordered_groups(), json)
        }
    }
}

fn open(wallet: &Arc<SnapshotWallet>, config: EngineConfig) -> ManageAddress {
    ManageAddress::new(wallet.clone(), wallet.clone(), wallet.clone(), config)
}

fn ensure_published(outcome: PublishOutcome, manage: &ManageAddress) -> ShellResult<()> {
    match outcome {
        PublishOutcome::Published => Ok(()),
        _ => Err(ShellError::CatalogError(
            manage.error().unwrap_or("cycle not published").to_string(),
        )),
    }
}

fn print_groups(groups: &[&Group], json: bool) -> ShellResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(groups)?);
        return Ok(());
    }

    for (i, group) in groups.iter().enumerate() {
        println!(
            "{}. {}\t(rank {}, {} accounts)",
            i + 1,
            group.name,
            group.rank(),
            group.len()
        );
        for account in &group.members {
            println!("     {}\t{}", account.address, account.balance);
        }
    }
    Ok(())
}
