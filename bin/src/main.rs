//! Read-only Matrix deposit tooling.
//!
//! Submission needs a signing backend and stays a library concern; this
//! binary covers the verifier-side operations that only need public RPC.

use alloy_primitives::B256;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use matrix_client::{MatrixClient, MatrixClientConfig};

#[derive(Parser)]
#[command(name = "matrix-cli")]
#[command(about = "Resolve Matrix transaction hashes and read the FCT mint rate")]
struct Args {
    /// L1 chain id (56 for BSC mainnet, 97 for BSC testnet)
    #[arg(long, default_value = "56")]
    l1_chain_id: u64,

    /// L1 RPC URL override
    #[arg(long, env = "MATRIX_L1_RPC_URL")]
    l1_rpc_url: Option<String>,

    /// L2 RPC URL override
    #[arg(long, env = "MATRIX_L2_RPC_URL")]
    l2_rpc_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recompute the Matrix transaction hash for an L1 deposit transaction
    Resolve {
        /// L1 transaction hash
        l1_tx_hash: B256,
    },
    /// Read the live FCT mint rate from the L2 oracle
    MintRate,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,matrix_client=debug")),
        )
        .init();

    let args = Args::parse();

    let client = MatrixClient::from_config(
        MatrixClientConfig::builder()
            .chain_id(args.l1_chain_id)
            .maybe_l1_rpc_url(args.l1_rpc_url)
            .maybe_l2_rpc_url(args.l2_rpc_url)
            .build(),
    )?;

    match args.command {
        Command::Resolve { l1_tx_hash } => {
            info!("resolving {l1_tx_hash} on chain {}", args.l1_chain_id);
            let matrix_tx_hash = client.matrix_tx_hash_from_l1_hash(l1_tx_hash).await?;
            println!("{matrix_tx_hash}");
        }
        Command::MintRate => {
            let rate = client.fct_mint_rate().await?;
            println!("{rate}");
        }
    }

    Ok(())
}
