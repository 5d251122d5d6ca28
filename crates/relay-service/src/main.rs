use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use relay_config::ConfigLoader;
use relay_core::Relay;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "transfer-relay")]
#[command(about = "Operator-authorized transfer relay", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Path to configuration file
	#[arg(short, long, value_name = "FILE", env = "RELAY_CONFIG", default_value = "config/relay.toml")]
	config: PathBuf,

	/// Log level override (trace, debug, info, warn, error)
	#[arg(long, env = "RELAY_LOG_LEVEL", default_value = "info")]
	log_level: String,
}

#[derive(Subcommand)]
enum Commands {
	/// Transfer the native asset to the configured recipient
	TransferNative,
	/// Fund with native value and transfer the wrapped token
	WrapAndTransfer,
	/// Swap native value into the settlement token and transfer the output
	SwapAndTransfer,
	/// Validate the configuration file
	Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_tracing(&cli.log_level)?;

	let config = ConfigLoader::from_file(&cli.config)
		.with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;

	if let Commands::Validate = cli.command {
		info!("Configuration is valid");
		info!("RPC endpoint: {}", config.rpc.url);
		info!("Contract: {}", config.contract.address);
		info!("Swap flow configured: {}", config.swap.is_some());
		return Ok(());
	}

	let relay = Relay::connect(config)
		.await
		.context("Failed to connect relay")?;

	let output = match cli.command {
		Commands::TransferNative => {
			let outcome = relay
				.transfer_native()
				.await
				.context("transferNative flow failed")?;
			serde_json::to_string_pretty(&outcome)?
		}
		Commands::WrapAndTransfer => {
			let outcome = relay
				.wrap_and_transfer()
				.await
				.context("wrapAndTransfer flow failed")?;
			serde_json::to_string_pretty(&outcome)?
		}
		Commands::SwapAndTransfer => {
			let outcome = relay
				.swap_and_transfer()
				.await
				.context("swapAndTransfer flow failed")?;
			serde_json::to_string_pretty(&outcome)?
		}
		Commands::Validate => unreachable!(),
	};

	println!("{}", output);
	Ok(())
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer())
		.init();

	Ok(())
}
