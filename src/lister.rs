use crate::error::SweepError;
use crate::ops;
use crate::path::PathNormalizer;
use crate::store::{Result, SecretStore};

/// Hard ceiling on traversal depth. Exceeding it is a distinct error, not a
/// silent truncation: a hierarchy nested deeper than this is either cyclic
/// or hostile, and a partial enumeration must never feed a delete.
pub const MAX_DEPTH: usize = 10;

/// Depth-bounded depth-first traversal that flattens a directory-shaped key
/// hierarchy into its leaf paths.
pub struct RecursiveLister<'a, S> {
    store: &'a S,
    normalizer: &'a PathNormalizer,
}

impl<'a, S: SecretStore> RecursiveLister<'a, S> {
    pub fn new(store: &'a S, normalizer: &'a PathNormalizer) -> Self {
        Self { store, normalizer }
    }

    /// Every leaf reachable under `root`, in discovery order (depth-first,
    /// left-to-right). Any list failure at any depth aborts the whole
    /// traversal; no partial set is returned.
    pub fn leaves(&self, root: &str) -> Result<Vec<String>> {
        let mut found = Vec::new();
        self.walk(root, 0, &mut found)?;
        Ok(found)
    }

    fn walk(&self, path: &str, depth: usize, found: &mut Vec<String>) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(SweepError::DepthExceeded {
                path: path.to_string(),
                max: MAX_DEPTH,
            });
        }

        // Listing returns relative child names; the full path is always
        // parent + child, even when the listing itself came from the
        // metadata form.
        for child in ops::list_with_fallback(self.store, self.normalizer, path)? {
            let full = format!("{}{}", path, child);
            if child.ends_with('/') {
                self.walk(&full, depth + 1, found)?;
            } else {
                found.push(full);
            }
        }

        Ok(())
    }
}
