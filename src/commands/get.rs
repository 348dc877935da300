use std::io::Write;

use anyhow::{Context, Result};

use crate::config;
use crate::ops;
use crate::store::vault::VaultClient;

pub fn run(path: &str) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let cfg = config::load(&cwd)?;
    let token = config::resolve_token().context("Failed to resolve Vault token")?;
    let client = VaultClient::new(&cfg, token)?;

    let payload = ops::read_payload(&client, path)?;
    std::io::stdout()
        .write_all(&payload)
        .context("Failed to write payload to stdout")?;

    Ok(())
}
