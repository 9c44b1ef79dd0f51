use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use solana_portal::prelude::*;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "trade")]
#[command(about = "Interactively buy or sell a pump.fun token", long_about = None)]
struct Cli {
    /// Venue sent with the trade build request
    #[arg(short, long, default_value = solana_portal::network::DEFAULT_DEX)]
    dex: String,

    /// Per-request HTTP timeout; overrides PORTAL_HTTP_TIMEOUT_SECS
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("solana_portal=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind(), "Trade flow failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> PortalResult<TradeReceipt> {
    let config = PortalConfig::from_env()?;
    let wallet = config.wallet()?;

    println!("=== SolanaPortal BOT API ===");
    println!("Wallet: {}", wallet.address());
    match &config.rpc_url {
        Some(url) => tracing::info!(rpc_url = %url, "RPC endpoint configured"),
        None => tracing::info!("RPC_URL not set"),
    }

    let mut builder = PortalClient::builder()
        .endpoints(config.endpoints.clone())
        .explorer_url(&config.explorer_url)
        .dex(&cli.dex)
        .timeout(config.timeout);
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    client
        .trades()
        .collect_and_execute(&wallet, &mut stdin, &mut stdout)
        .await
}
