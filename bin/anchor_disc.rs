//! `anchor-disc` - derive and convert Anchor discriminators from the command line.
//!
//! ## Commands
//!
//! - `derive`: hash a namespaced name and print its discriminator
//! - `convert`: re-encode an identifier between hex, Base58 and Base64
//! - `find`: search candidate names for one matching a known discriminator
//! - `fetch`: fetch a transaction by signature and print it as JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, Level};

use anchor_disc::{
    derive_discriminator, find_matching_name, namespaced_discriminator, telemetry::init_tracing,
    Discriminator, Encoding, HttpTransactionFetcher, RpcConfig, TransactionFetcher,
};

#[derive(Parser)]
#[command(name = "anchor-disc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Derive and convert Anchor account/instruction discriminators", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the discriminator for a name such as `account:PoolState`
    Derive {
        /// Full preimage, or the bare name when --namespace is given
        name: String,

        /// Namespace to prefix (`account`, `global`, `event`)
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Convert an identifier between encodings
    Convert {
        input: String,

        /// Encoding of the input: hex, base58 or base64
        #[arg(long, default_value = "hex")]
        from: Encoding,

        /// Encoding to print: hex, base58 or base64
        #[arg(long, default_value = "base58")]
        to: Encoding,
    },

    /// Find which candidate preimage produces a known discriminator
    Find {
        /// Target discriminator, hex or Base58
        target: Discriminator,

        /// Candidate preimages, e.g. `global:fill global:fill_v2`
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Fetch a transaction by signature
    Fetch {
        /// Base58 transaction signature
        signature: String,

        /// JSON-RPC endpoint
        #[arg(long, env = "RPC_URL")]
        rpc_url: Option<String>,

        /// Commitment level
        #[arg(long, default_value = "confirmed")]
        commitment: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    init_tracing(cli.json, level);

    match cli.command {
        Commands::Derive { name, namespace } => cmd_derive(&name, namespace.as_deref()),
        Commands::Convert { input, from, to } => cmd_convert(&input, from, to),
        Commands::Find { target, candidates } => cmd_find(target, &candidates),
        Commands::Fetch {
            signature,
            rpc_url,
            commitment,
            timeout,
        } => {
            let config = match rpc_url {
                Some(url) => RpcConfig::new(url),
                None => RpcConfig::default(),
            }
            .with_commitment(commitment)
            .with_timeout_secs(timeout);
            cmd_fetch(&signature, config)
        }
    }
}

fn cmd_derive(name: &str, namespace: Option<&str>) -> Result<()> {
    let (preimage, bytes) = match namespace {
        Some(ns) => (format!("{}:{}", ns, name), namespaced_discriminator(ns, name)),
        None => (name.to_string(), derive_discriminator(name)),
    };
    let disc = Discriminator::from_bytes(bytes);
    debug!(%preimage, "derived discriminator");

    println!("preimage: {}", preimage);
    println!("hex:      {}", disc.to_hex());
    println!("base58:   {}", disc.to_base58());
    println!("bytes:    {:?}", disc.as_bytes());
    Ok(())
}

fn cmd_convert(input: &str, from: Encoding, to: Encoding) -> Result<()> {
    let bytes = from
        .decode(input)
        .with_context(|| format!("failed to decode input as {}", from))?;
    println!("{}", to.encode(&bytes));
    Ok(())
}

fn cmd_find(target: Discriminator, candidates: &[String]) -> Result<()> {
    println!("Looking for discriminator: {:02x?}", target.as_bytes());

    for candidate in candidates {
        let disc = Discriminator::derive(candidate);
        println!("{:30} => {:02x?}", candidate, disc.as_bytes());
    }

    match find_matching_name(target.as_bytes(), candidates.iter().map(String::as_str)) {
        Some(name) => println!("match: {}", name),
        None => anyhow::bail!("no candidate matches {}", target),
    }
    Ok(())
}

fn cmd_fetch(signature: &str, config: RpcConfig) -> Result<()> {
    debug!(url = %config.url, "using RPC endpoint");
    let fetcher = HttpTransactionFetcher::new(config).context("failed to build RPC client")?;
    let record = fetcher
        .fetch_transaction(signature)
        .with_context(|| format!("failed to fetch transaction {}", signature))?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
