use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::confirm::ConfirmationGate;
use crate::error::SweepError;
use crate::lister::RecursiveLister;
use crate::ops;
use crate::path::PathNormalizer;
use crate::store::{Result, SecretStore};

/// Outcome of one enumerate-confirm-delete cycle. Per-item failures are data
/// here, not control flow: the batch always runs to completion once
/// confirmed.
#[derive(Debug)]
pub struct SweepReport {
    pub confirmed: bool,
    pub attempted: usize,
    pub deleted: usize,
    pub failures: Vec<(String, SweepError)>,
    pub elapsed: Duration,
}

/// Batch delete of every leaf under a root path, gated on operator
/// confirmation. Deletion is strictly sequential: per-item failure logging
/// keeps a stable user-visible order, and the backend makes no promises
/// about concurrent structural mutation of a subtree being swept.
pub struct BatchDelete<'a, S, G> {
    store: &'a S,
    normalizer: &'a PathNormalizer,
    gate: &'a mut G,
}

impl<'a, S: SecretStore, G: ConfirmationGate> BatchDelete<'a, S, G> {
    pub fn new(store: &'a S, normalizer: &'a PathNormalizer, gate: &'a mut G) -> Self {
        Self {
            store,
            normalizer,
            gate,
        }
    }

    /// Enumerate all leaves under `root`, present them, and on affirmation
    /// delete each one. Enumeration failure and an empty leaf set are fatal;
    /// zero leaves is deliberately an error rather than a quiet success, so
    /// a typo'd root cannot masquerade as a completed sweep. A declined
    /// confirmation deletes nothing and is not an error.
    pub fn run(&mut self, root: &str) -> Result<SweepReport> {
        info!("collecting keys under {}", root);
        let start = Instant::now();

        let leaves = RecursiveLister::new(self.store, self.normalizer).leaves(root)?;
        if leaves.is_empty() {
            return Err(SweepError::EmptyResult(root.to_string()));
        }

        println!("=================");
        println!("Found keys:");
        for (i, key) in leaves.iter().enumerate() {
            println!("{} {}", i, key);
        }

        let confirmed = self.gate.ask("Delete all keys (yes/no): ")?;

        let mut report = SweepReport {
            confirmed,
            attempted: 0,
            deleted: 0,
            failures: Vec::new(),
            elapsed: Duration::ZERO,
        };

        if confirmed {
            info!("deleting {} keys", leaves.len());
            for key in &leaves {
                report.attempted += 1;
                match ops::delete(self.store, self.normalizer, key) {
                    Ok(()) => report.deleted += 1,
                    Err(e) => {
                        // One failed key never halts the rest of the batch;
                        // the operator retries failures by hand.
                        warn!("failed to delete {}: {}", key, e);
                        report.failures.push((key.clone(), e));
                    }
                }
            }
        }

        report.elapsed = start.elapsed();
        Ok(report)
    }
}
