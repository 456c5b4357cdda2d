pub mod address;

use clap::{Parser, Subcommand};

use crate::account::{wallet_type_name, Brand};

#[derive(Parser)]
#[command(name = "wallet-shell")]
#[command(about = "Wallet shell address manager", long_about = None)]
pub struct Cli {
    /// Shell configuration file
    #[arg(long, global = true, default_value = "wallet-shell.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage-address view operations
    Address {
        #[command(subcommand)]
        cmd: address::AddressCommands,
    },
    /// Show how a brand or keyring label is named and ranked
    Rank {
        label: String,
    },
}

pub fn handle_rank_command(label: &str) {
    let brand = Brand::from_label(label);
    println!("Label:    {}", label);
    println!("Name:     {}", wallet_type_name(label));
    println!("Brand:    {:?}", brand);
    match brand.category() {
        Some(category) => println!("Category: {:?}", category),
        None => println!("Category: -"),
    }
    println!("Rank:     {}", brand.rank());
}
