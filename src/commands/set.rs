use std::io::Read;

use anyhow::{Context, Result};

use crate::config;
use crate::ops;
use crate::store::vault::VaultClient;

pub fn run(path: &str) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let cfg = config::load(&cwd)?;
    let token = config::resolve_token().context("Failed to resolve Vault token")?;
    let client = VaultClient::new(&cfg, token)?;

    let mut payload = Vec::new();
    std::io::stdin()
        .read_to_end(&mut payload)
        .context("Failed to read payload from stdin")?;
    if payload.is_empty() {
        anyhow::bail!("Refusing to store an empty payload.");
    }

    ops::write_payload(&client, path, &payload)?;
    println!("Key '{}' written ({} bytes).", path, payload.len());

    Ok(())
}
