use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::Config;
use crate::error::SweepError;
use crate::store::{Fields, Result, SecretStore};

const TOKEN_HEADER: &str = "X-Vault-Token";

/// Blocking HTTP client for the Vault logical API (`/v1/<path>`).
///
/// Stateless from the caller's perspective: one handle, no connection
/// management owned here beyond what reqwest pools internally.
pub struct VaultClient {
    http: Client,
    address: String,
    token: SecretString,
}

impl VaultClient {
    pub fn new(cfg: &Config, token: SecretString) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| SweepError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            address: cfg.address.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.address, path.trim_start_matches('/'))
    }

    fn transport(&self, action: &'static str, path: &str, detail: impl ToString) -> SweepError {
        SweepError::Transport {
            action,
            path: path.to_string(),
            store: self.address.clone(),
            detail: detail.to_string(),
        }
    }

    /// Check the response status, mapping 404 to `None` and any other
    /// non-success status to a transport error.
    fn checked(
        &self,
        action: &'static str,
        path: &str,
        resp: reqwest::blocking::Response,
    ) -> Result<Option<reqwest::blocking::Response>> {
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            return Err(self.transport(
                action,
                path,
                format!("server returned {}: {}", status, body.trim()),
            ));
        }
        Ok(Some(resp))
    }
}

impl SecretStore for VaultClient {
    fn read(&self, path: &str) -> Result<Option<Fields>> {
        let resp = self
            .http
            .get(self.url(path))
            .header(TOKEN_HEADER, self.token.expose_secret())
            .send()
            .map_err(|e| self.transport("read", path, e))?;

        let resp = match self.checked("read", path, resp)? {
            Some(resp) => resp,
            None => return Ok(None),
        };

        let body: Value = resp.json().map_err(|e| self.transport("read", path, e))?;
        match body.get("data") {
            Some(Value::Object(fields)) => Ok(Some(fields.clone())),
            _ => Err(self.transport("read", path, "response is missing the data object")),
        }
    }

    fn write(&self, path: &str, fields: &Fields) -> Result<()> {
        let resp = self
            .http
            .post(self.url(path))
            .header(TOKEN_HEADER, self.token.expose_secret())
            .json(fields)
            .send()
            .map_err(|e| self.transport("write", path, e))?;

        match self.checked("write", path, resp)? {
            Some(_) => Ok(()),
            None => Err(self.transport("write", path, "server returned 404 Not Found")),
        }
    }

    fn list(&self, path: &str) -> Result<Vec<String>> {
        let resp = self
            .http
            .get(self.url(path))
            .query(&[("list", "true")])
            .header(TOKEN_HEADER, self.token.expose_secret())
            .send()
            .map_err(|e| self.transport("list", path, e))?;

        // A listing miss (unknown path, or the wrong engine generation's
        // addressing form) comes back as 404; callers decide whether to
        // retry under the metadata form.
        let resp = match self.checked("list", path, resp)? {
            Some(resp) => resp,
            None => return Ok(Vec::new()),
        };

        let body: Value = resp.json().map_err(|e| self.transport("list", path, e))?;
        let keys = match body.pointer("/data/keys") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(keys)) => keys,
            Some(_) => return Err(self.transport("list", path, "keys field is not a list")),
        };

        keys.iter()
            .map(|k| {
                k.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.transport("list", path, "keys entry is not a string"))
            })
            .collect()
    }

    fn delete(&self, path: &str) -> Result<()> {
        let resp = self
            .http
            .delete(self.url(path))
            .header(TOKEN_HEADER, self.token.expose_secret())
            .send()
            .map_err(|e| self.transport("delete", path, e))?;

        // 404 is a failure here, not a no-op: on a v2 engine it is the
        // signal that the path needs its metadata form.
        match self.checked("delete", path, resp)? {
            Some(_) => Ok(()),
            None => Err(self.transport("delete", path, "server returned 404 Not Found")),
        }
    }
}
