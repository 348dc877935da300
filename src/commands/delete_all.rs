use anyhow::{Context, Result};

use crate::config;
use crate::confirm::StdinGate;
use crate::path::PathNormalizer;
use crate::store::vault::VaultClient;
use crate::sweep::BatchDelete;

pub fn run(path: &str) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let cfg = config::load(&cwd)?;
    let token = config::resolve_token().context("Failed to resolve Vault token")?;
    let client = VaultClient::new(&cfg, token)?;

    // Listing expects a directory-shaped root.
    let mut root = path.to_string();
    if !root.ends_with('/') {
        root.push('/');
    }

    let normalizer = PathNormalizer::new();
    let mut gate = StdinGate;
    let report = BatchDelete::new(&client, &normalizer, &mut gate).run(&root)?;

    println!("Spent: {:.2}s", report.elapsed.as_secs_f64());

    if !report.confirmed {
        println!("Aborted, nothing deleted.");
        return Ok(());
    }

    if report.failures.is_empty() {
        println!("Deleted {} keys.", report.deleted);
    } else {
        // Failed keys are warnings, not a failed run: the operator retries
        // them individually.
        println!(
            "Deleted {} of {} keys; {} failed (see warnings above).",
            report.deleted,
            report.attempted,
            report.failures.len()
        );
    }

    Ok(())
}
