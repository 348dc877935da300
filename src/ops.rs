//! Single-item operations over a [`SecretStore`]: thin pass-throughs that add
//! the envelope codec and the v1/v2 path-form fallback.

use tracing::{debug, info};

use crate::envelope;
use crate::error::SweepError;
use crate::path::PathNormalizer;
use crate::store::{Result, SecretStore};

/// Read and decode the payload stored at `path`.
pub fn read_payload<S: SecretStore>(store: &S, path: &str) -> Result<Vec<u8>> {
    info!("get key {}", path);

    let fields = store
        .read(path)?
        .ok_or_else(|| SweepError::NotFound(path.to_string()))?;
    envelope::decode(path, &fields)
}

/// Encode and store a payload at `path`.
pub fn write_payload<S: SecretStore>(store: &S, path: &str, payload: &[u8]) -> Result<()> {
    let fields = envelope::encode(payload);
    info!("set key {} ({} bytes)", path, payload.len());

    store.write(path, &fields)
}

/// Check whether a key exists without decoding its value.
pub fn exists<S: SecretStore>(store: &S, path: &str) -> Result<bool> {
    info!("head key {}", path);

    Ok(store.read(path)?.is_some())
}

/// Delete the key at `path`. The path is first tried as given; on failure one
/// retry happens under the metadata form, and that second failure (if any) is
/// the one surfaced.
pub fn delete<S: SecretStore>(store: &S, normalizer: &PathNormalizer, path: &str) -> Result<()> {
    info!("delete key {}", path);

    match store.delete(path) {
        Ok(()) => Ok(()),
        Err(first) => {
            debug!("delete of {} failed ({}), retrying metadata form", path, first);
            store.delete(&normalizer.to_metadata(path))
        }
    }
}

/// List the children of `path`, retrying once under the metadata form when
/// the primary form yields nothing. An empty directory and a wrong addressing
/// form are indistinguishable from a bare empty listing, so an empty primary
/// result always costs the extra call. Raw names: directory children keep
/// their trailing separator.
pub fn list_with_fallback<S: SecretStore>(
    store: &S,
    normalizer: &PathNormalizer,
    path: &str,
) -> Result<Vec<String>> {
    info!("list key {}", path);

    let children = store.list(path)?;
    if !children.is_empty() {
        return Ok(children);
    }
    store.list(&normalizer.to_metadata(path))
}

/// One-level listing for display: child names with trailing separators
/// trimmed.
pub fn list_children<S: SecretStore>(
    store: &S,
    normalizer: &PathNormalizer,
    path: &str,
) -> Result<Vec<String>> {
    let children = list_with_fallback(store, normalizer, path)?;
    Ok(children
        .into_iter()
        .map(|k| k.trim_end_matches('/').to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fake::FakeStore;

    #[test]
    fn test_read_payload_roundtrip() {
        let store = FakeStore::new();
        write_payload(&store, "kv/app/token", b"s3cr3t").unwrap();
        assert_eq!(read_payload(&store, "kv/app/token").unwrap(), b"s3cr3t");
    }

    #[test]
    fn test_read_missing_key_is_not_found() {
        let store = FakeStore::new();
        let err = read_payload(&store, "kv/app/missing").unwrap_err();
        assert!(matches!(err, SweepError::NotFound(p) if p == "kv/app/missing"));
    }

    #[test]
    fn test_exists() {
        let store = FakeStore::new();
        write_payload(&store, "kv/app/token", b"x").unwrap();
        assert!(exists(&store, "kv/app/token").unwrap());
        assert!(!exists(&store, "kv/app/other").unwrap());
    }

    #[test]
    fn test_delete_primary_form() {
        let store = FakeStore::new();
        let norm = PathNormalizer::new();
        delete(&store, &norm, "kv/app/token").unwrap();
        assert_eq!(*store.deleted.borrow(), vec!["kv/app/token"]);
    }

    #[test]
    fn test_delete_falls_back_to_metadata_form() {
        let mut store = FakeStore::new();
        store.fail_deletes = vec!["kv/app/token".into()];
        let norm = PathNormalizer::new();

        delete(&store, &norm, "kv/app/token").unwrap();
        assert_eq!(*store.deleted.borrow(), vec!["kv/metadata/app/token"]);
    }

    #[test]
    fn test_delete_surfaces_second_failure() {
        let mut store = FakeStore::new();
        store.fail_deletes = vec!["kv/app/token".into(), "kv/metadata/app/token".into()];
        let norm = PathNormalizer::new();

        let err = delete(&store, &norm, "kv/app/token").unwrap_err();
        assert!(matches!(err, SweepError::Transport { path, .. } if path == "kv/metadata/app/token"));
        assert!(store.deleted.borrow().is_empty());
    }

    #[test]
    fn test_list_with_fallback_prefers_primary() {
        let store = FakeStore::with_tree(&[("kv/app/", &["token", "nested/"])]);
        let norm = PathNormalizer::new();

        let children = list_with_fallback(&store, &norm, "kv/app/").unwrap();
        assert_eq!(children, vec!["token", "nested/"]);
        assert_eq!(*store.list_calls.borrow(), vec!["kv/app/"]);
    }

    #[test]
    fn test_list_with_fallback_retries_metadata_form_when_empty() {
        let store = FakeStore::with_tree(&[("kv/metadata/app/", &["token"])]);
        let norm = PathNormalizer::new();

        let children = list_with_fallback(&store, &norm, "kv/app/").unwrap();
        assert_eq!(children, vec!["token"]);
        assert_eq!(
            *store.list_calls.borrow(),
            vec!["kv/app/", "kv/metadata/app/"]
        );
    }

    #[test]
    fn test_list_children_trims_directory_markers() {
        let store = FakeStore::with_tree(&[("kv/app/", &["token", "nested/"])]);
        let norm = PathNormalizer::new();

        let children = list_children(&store, &norm, "kv/app/").unwrap();
        assert_eq!(children, vec!["token", "nested"]);
    }
}
