#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use airdrop_cli::{build_tree, prove, verdict, verify_args, write_json_atomic};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "airdrop-merkle")]
#[command(about = "Airdrop allowlist Merkle tree tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the tree from an allowlist and write the root and every claim
    BuildTree {
        /// CSV allowlist, one `address,amount` per line
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file; printed to stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the claim (amount and proof) for one allowlist index
    Prove {
        /// CSV allowlist, one `address,amount` per line
        #[arg(short, long)]
        input: PathBuf,

        /// Claim index (0-based line order)
        #[arg(long)]
        index: usize,
    },

    /// Check a claim against a published root
    Verify {
        /// Published root hash (hex)
        #[arg(long)]
        root: String,

        /// Claimant address (hex)
        #[arg(long)]
        address: String,

        /// Claimed amount (decimal)
        #[arg(long)]
        amount: String,

        /// Proof hashes (hex), leaf to root
        #[arg(long, value_delimiter = ',')]
        proof: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing (controlled by RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::BuildTree { input, output } => run_build_tree(&input, output.as_deref()),
        Commands::Prove { input, index } => {
            let claim = prove(&input, index)?;
            println!("{}", serde_json::to_string_pretty(&claim)?);
            Ok(())
        }
        Commands::Verify {
            root,
            address,
            amount,
            proof,
        } => {
            let valid = verify_args(&root, &address, &amount, &proof)?;
            println!("{}", verdict(valid));
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn run_build_tree(input: &Path, output: Option<&Path>) -> Result<()> {
    let report = build_tree(input)?;
    match output {
        Some(path) => {
            write_json_atomic(path, &report)?;
            info!(path = %path.display(), "wrote claim report");
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
