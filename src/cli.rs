use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "vaultsweep",
    about = "Recursively enumerate and delete secrets in a Vault-style KV store.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recursively delete every secret under a path (lists first, asks before deleting).
    DeleteAll {
        /// Root path to sweep, e.g. secret/app/
        path: String,
    },

    /// Read a secret payload and write it to stdout.
    Get {
        /// The secret path.
        path: String,
    },

    /// Store a secret payload read from stdin.
    Set {
        /// The secret path.
        path: String,
    },

    /// Delete a single secret (retries under the v2 metadata path form on failure).
    Delete {
        /// The secret path.
        path: String,
    },

    /// Check whether a secret exists.
    Exists {
        /// The secret path.
        path: String,
    },

    /// List the immediate children of a path.
    List {
        /// The directory path, e.g. secret/app/
        path: String,
    },
}
