//! Forward a raw JSON payload to the remote compute service.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use numvec::config::{load_config, RemoteConfig};
use numvec::remote::RemoteClient;

pub fn run<W: Write>(
    operation: &str,
    payload: &str,
    config_path: Option<&Path>,
    mut out: W,
) -> Result<()> {
    let request: Value = serde_json::from_str(payload).context("Payload is not valid JSON")?;
    let config = match config_path {
        Some(path) => load_config(path)?.remote,
        None => RemoteConfig::default(),
    };
    log::info!("Calling {} on {}", operation, config.base_url);
    let client = RemoteClient::new(config)?;
    let response: Value = client.call(operation, &request)?;
    serde_json::to_writer_pretty(&mut out, &response).context("Failed to write response")?;
    writeln!(out)?;
    Ok(())
}
