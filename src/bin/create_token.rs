use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use solana_portal::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "create-token")]
#[command(about = "Launch a pump.fun token from a JSON descriptor", long_about = None)]
struct Cli {
    /// Token descriptor file; the image path inside it is relative to this file
    #[arg(short, long, default_value = "token.json")]
    descriptor: PathBuf,

    /// Launch platform segment of the create endpoint
    #[arg(short, long, default_value = solana_portal::network::DEFAULT_PLATFORM)]
    platform: String,

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
        Ok(receipt) => {
            println!("{}", receipt);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(kind = e.kind(), "Create flow failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> PortalResult<LaunchReceipt> {
    let config = PortalConfig::from_env()?;
    let wallet = config.wallet()?;
    println!("Wallet: {}", wallet.address());

    let mut builder = PortalClient::builder()
        .endpoints(config.endpoints.clone())
        .explorer_url(&config.explorer_url)
        .platform(&cli.platform)
        .timeout(config.timeout);
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    let launch = TokenLaunch::load(&cli.descriptor)?;
    client.tokens().create(&wallet, &launch).await
}
