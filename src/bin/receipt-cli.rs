use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, error};

use eth_qtum_proxy::{eth, log, JsonRpcError, JsonRpcRequest, Manager, TransformError};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the qtum request an eth_getTransactionReceipt call for the given hash turns into.
    Rewrite {
        /// Transaction hash, with or without 0x prefix.
        #[clap(long)]
        tx_hash: String,
    },
    /// Decode a raw gettransactionreceipt result into an Ethereum receipt.
    Decode {
        /// File holding the raw result. Reads stdin when omitted.
        #[clap(long)]
        input: Option<PathBuf>,
    },
    /// List the Ethereum methods that have a transformer.
    Methods {},
}

fn read_input(input: Option<PathBuf>) -> anyhow::Result<Vec<u8>> {
    match input {
        Some(path) => fs::read(&path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn exit_with_rpc_error(err: TransformError) -> ! {
    error!(%err, "transform failed");
    let rpc_error = JsonRpcError::from(&err);
    println!("{}", json!({ "error": rpc_error }));
    process::exit(1);
}

fn main() -> anyhow::Result<()> {
    log::init();

    let cli = Cli::parse();
    let manager = Manager::new();

    match cli.command {
        Commands::Rewrite { tx_hash } => {
            let request =
                JsonRpcRequest::new(1, eth::METHOD_GET_TRANSACTION_RECEIPT, json!([tx_hash]));
            match manager.transform(request) {
                Ok((rewritten, _)) => println!("{}", serde_json::to_string_pretty(&rewritten)?),
                Err(err) => exit_with_rpc_error(err),
            }
        }
        Commands::Decode { input } => {
            let raw_result = read_input(input)?;
            debug!(bytes = raw_result.len(), "read raw result");
            let transformer = manager
                .get(eth::METHOD_GET_TRANSACTION_RECEIPT)
                .unwrap_or_else(|err| exit_with_rpc_error(err));
            match transformer.decode(&raw_result) {
                Ok(receipt) => println!("{}", serde_json::to_string_pretty(&receipt)?),
                Err(err) => exit_with_rpc_error(err),
            }
        }
        Commands::Methods {} => {
            for method in manager.methods() {
                println!("{method}");
            }
        }
    }

    Ok(())
}
