use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use wallet_shell::cli::{self, Cli, Commands};
use wallet_shell::config::ShellConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = ShellConfig::load_or_default(&cli.config);

    // RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Address { cmd } => {
            if let Err(e) = cli::address::handle_address_command(cmd, config.engine).await {
                error!("{}", e);
                std::process::exit(1);
            }
        }
        Commands::Rank { label } => {
            cli::handle_rank_command(&label);
        }
    }
}
