use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;

use crate::error::SweepError;

const CONFIG_FILE: &str = "vaultsweep.toml";
const TOKEN_FILE: &str = ".vault-token";
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8200";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub address: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Resolve the effective config: built-in defaults, overridden by an optional
/// `vaultsweep.toml` in the working directory, overridden in turn by the
/// standard `VAULT_ADDR` / `VAULT_CLIENT_TIMEOUT` environment variables.
pub fn load(dir: &Path) -> Result<Config, SweepError> {
    let cfg = read_file(dir)?.unwrap_or_default();
    apply_env(
        cfg,
        non_empty_var("VAULT_ADDR"),
        non_empty_var("VAULT_CLIENT_TIMEOUT"),
    )
}

/// Resolve the Vault token: `VAULT_TOKEN`, then `~/.vault-token` (as written
/// by `vault login`), then an interactive prompt.
pub fn resolve_token() -> Result<SecretString, SweepError> {
    if let Some(token) = non_empty_var("VAULT_TOKEN") {
        return Ok(SecretString::new(token));
    }

    if let Some(home) = std::env::var_os("HOME") {
        let token_file = Path::new(&home).join(TOKEN_FILE);
        if token_file.exists() {
            let token = std::fs::read_to_string(&token_file)?;
            let token = token.trim();
            if !token.is_empty() {
                return Ok(SecretString::new(token.to_string()));
            }
        }
    }

    let token = rpassword::prompt_password("Vault token: ").map_err(SweepError::Io)?;
    if token.is_empty() {
        return Err(SweepError::Config("a Vault token is required".into()));
    }
    Ok(SecretString::new(token))
}

fn read_file(dir: &Path) -> Result<Option<Config>, SweepError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(&path)?;
    toml::from_str(&raw)
        .map(Some)
        .map_err(|e| SweepError::Config(format!("{}: {}", CONFIG_FILE, e)))
}

fn apply_env(
    mut cfg: Config,
    address: Option<String>,
    timeout: Option<String>,
) -> Result<Config, SweepError> {
    if let Some(address) = address {
        cfg.address = address;
    }
    if let Some(timeout) = timeout {
        cfg.timeout_secs = timeout.parse().map_err(|_| {
            SweepError::Config("VAULT_CLIENT_TIMEOUT must be a whole number of seconds".into())
        })?;
    }
    Ok(cfg)
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        assert!(read_file(dir.path()).unwrap().is_none());

        let cfg = Config::default();
        assert_eq!(cfg.address, DEFAULT_ADDRESS);
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "address = \"https://vault.internal:8200\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let cfg = read_file(dir.path()).unwrap().unwrap();
        assert_eq!(cfg.address, "https://vault.internal:8200");
        assert_eq!(cfg.timeout_secs, 5);
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "address = \"https://vault.internal:8200\"\n",
        )
        .unwrap();

        let cfg = read_file(dir.path()).unwrap().unwrap();
        assert_eq!(cfg.address, "https://vault.internal:8200");
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_unknown_field_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "adress = \"typo\"\n").unwrap();

        let err = read_file(dir.path()).unwrap_err();
        assert!(matches!(err, SweepError::Config(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let cfg = Config {
            address: "http://from-file:8200".into(),
            timeout_secs: 5,
        };
        let cfg = apply_env(cfg, Some("http://from-env:8200".into()), Some("30".into())).unwrap();
        assert_eq!(cfg.address, "http://from-env:8200");
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn test_absent_env_keeps_config() {
        let cfg = apply_env(Config::default(), None, None).unwrap();
        assert_eq!(cfg.address, DEFAULT_ADDRESS);
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_non_numeric_timeout_is_a_config_error() {
        let err = apply_env(Config::default(), None, Some("soon".into())).unwrap_err();
        assert!(matches!(err, SweepError::Config(_)));
    }
}
