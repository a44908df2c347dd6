//! Sui Submitter - command line front end
//!
//! Loads the network and signer configuration, then signs and submits
//! transactions or requests faucet funds for the configured identity.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use sui_submitter::config::{Settings, CONFIG_ENV};
use sui_submitter::metrics;
use sui_submitter::types::HttpHeaders;
use sui_submitter::{
    Base64DataBuffer, ExecuteTransactionRequestType, JsonRpcProvider, KeypairSigner, Provider,
    TransactionInput, TransactionSubmitter,
};

#[derive(Parser)]
#[command(name = "sui-submitter")]
#[command(version, about = "Sign and submit Sui transactions", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, env = CONFIG_ENV, default_value = "config/default.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the signer's address
    Address,

    /// Request gas coins for the signer from the faucet
    Faucet {
        /// Extra HTTP header sent to the faucet (repeatable)
        #[arg(long = "header", value_name = "KEY=VALUE", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },

    /// Submit a JSON file holding a tagged transaction intent
    Execute {
        /// File containing `{"kind": ..., "data": ...}`
        file: PathBuf,

        /// Confirmation to wait for (defaults to the configured value)
        #[arg(long)]
        request_type: Option<ExecuteTransactionRequestType>,
    },

    /// Sign and submit base64 transaction bytes
    SubmitBytes {
        /// Base64 encoded transaction bytes
        tx_bytes: String,

        /// Confirmation to wait for (defaults to the configured value)
        #[arg(long)]
        request_type: Option<ExecuteTransactionRequestType>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let settings = Settings::load(Some(&cli.config))?;
    debug!("Loaded configuration from {:?}", cli.config);

    let private_key = env::var(&settings.signer.private_key_env).with_context(|| {
        format!(
            "Environment variable {} is not set",
            settings.signer.private_key_env
        )
    })?;
    let signer = KeypairSigner::from_encoded(&private_key).context("Invalid private key")?;

    let provider: Arc<dyn Provider> = Arc::new(
        JsonRpcProvider::new(&settings.network).context("Failed to create provider")?,
    );
    let submitter = TransactionSubmitter::new(signer, Some(provider), None);
    let default_request_type = settings.execution.request_type;

    match cli.command {
        Commands::Address => {
            println!("{}", submitter.get_address().await?);
        }
        Commands::Faucet { headers } => {
            let headers: HttpHeaders = headers.into_iter().collect();
            let headers = (!headers.is_empty()).then_some(&headers);

            let response = submitter
                .request_sui_from_faucet(headers)
                .await
                .context("Faucet request failed")?;
            info!(
                "Faucet transferred {} gas objects",
                response.transferred_gas_objects.len()
            );
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Execute { file, request_type } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read transaction file: {:?}", file))?;
            let tagged: serde_json::Value = serde_json::from_str(&contents)
                .with_context(|| format!("Transaction file is not JSON: {:?}", file))?;

            let response = submitter
                .sign_and_execute_transaction(
                    TransactionInput::Tagged(tagged),
                    request_type.unwrap_or(default_request_type),
                )
                .await
                .context("Transaction execution failed")?;
            if let Some(digest) = response.digest() {
                info!("Transaction digest: {}", digest);
            }
            println!("{}", serde_json::to_string_pretty(response.raw())?);
        }
        Commands::SubmitBytes {
            tx_bytes,
            request_type,
        } => {
            let tx_bytes =
                Base64DataBuffer::from_base64(&tx_bytes).context("Invalid transaction bytes")?;

            let response = submitter
                .sign_and_execute_transaction(tx_bytes, request_type.unwrap_or(default_request_type))
                .await
                .context("Transaction execution failed")?;
            if let Some(digest) = response.digest() {
                info!("Transaction digest: {}", digest);
            }
            println!("{}", serde_json::to_string_pretty(response.raw())?);
        }
    }

    if settings.metrics.enabled {
        debug!("Metrics:\n{}", metrics::gather());
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sui_submitter=debug,reqwest=warn,hyper=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();
}

/// Parse a `KEY=VALUE` header argument
fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {}", raw))?;
    if key.trim().is_empty() {
        return Err(format!("empty header name in {}", raw));
    }
    Ok((key.trim().to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("X-Api-Key = abc=def").unwrap(),
            ("X-Api-Key".to_string(), "abc=def".to_string())
        );
        assert!(parse_header("no-separator").is_err());
        assert!(parse_header("=value").is_err());
    }

    #[test]
    fn test_cli_parses_request_type() {
        let cli = Cli::try_parse_from([
            "sui-submitter",
            "--config",
            "local.toml",
            "submit-bytes",
            "AQID",
            "--request-type",
            "WaitForEffectsCert",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("local.toml"));
        match cli.command {
            Commands::SubmitBytes { request_type, .. } => assert_eq!(
                request_type,
                Some(ExecuteTransactionRequestType::WaitForEffectsCert)
            ),
            _ => panic!("expected submit-bytes"),
        }
    }
}
