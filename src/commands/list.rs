use anyhow::{Context, Result};

use crate::config;
use crate::ops;
use crate::path::PathNormalizer;
use crate::store::vault::VaultClient;

pub fn run(path: &str) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let cfg = config::load(&cwd)?;
    let token = config::resolve_token().context("Failed to resolve Vault token")?;
    let client = VaultClient::new(&cfg, token)?;

    let normalizer = PathNormalizer::new();
    let children = ops::list_children(&client, &normalizer, path)?;
    if children.is_empty() {
        println!("No keys under '{}'.", path);
    } else {
        for child in &children {
            println!("{}", child);
        }
    }

    Ok(())
}
