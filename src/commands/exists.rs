use anyhow::{Context, Result};

use crate::config;
use crate::ops;
use crate::store::vault::VaultClient;

pub fn run(path: &str) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let cfg = config::load(&cwd)?;
    let token = config::resolve_token().context("Failed to resolve Vault token")?;
    let client = VaultClient::new(&cfg, token)?;

    if ops::exists(&client, path)? {
        println!("Key '{}' exists.", path);
    } else {
        println!("Key '{}' does not exist.", path);
        std::process::exit(1);
    }

    Ok(())
}
