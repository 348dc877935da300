pub mod vault;

use crate::error::SweepError;

pub type Result<T> = std::result::Result<T, SweepError>;

/// A stored value: the JSON field map the backend keeps at a leaf path.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Core abstraction over the remote secret store. Everything above the
/// transport — single-item ops, traversal, batch delete — depends only on
/// this trait.
pub trait SecretStore {
    /// Fetch the field map at `path`. `None` means the key does not exist.
    fn read(&self, path: &str) -> Result<Option<Fields>>;

    fn write(&self, path: &str, fields: &Fields) -> Result<()>;

    /// Child names under `path`, in backend order. Directory children keep
    /// their trailing separator. A missing path and an empty directory both
    /// yield zero children; a failed call is a hard error.
    fn list(&self, path: &str) -> Result<Vec<String>>;

    fn delete(&self, path: &str) -> Result<()>;
}
