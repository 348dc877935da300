use regex::Regex;

/// Rewrites a path from its primary addressing form into the KV v2 metadata
/// form: `kv/foo/bar` becomes `kv/metadata/foo/bar`. The v2 engine addresses
/// structural operations (listing, version deletion) under a `metadata/`
/// prefix inserted after the mount segment, while v1 engines use the path
/// as given.
pub struct PathNormalizer {
    mount_prefix: Regex,
}

impl PathNormalizer {
    pub fn new() -> Self {
        Self {
            mount_prefix: Regex::new(r"^([A-Za-z0-9]+)/").expect("valid mount prefix pattern"),
        }
    }

    /// Insert `metadata/` after the first path segment. Inputs without a
    /// separator after a non-empty alphanumeric first segment are returned
    /// unchanged — the path simply has no v2 metadata form. Callers must not
    /// apply this twice to the same path.
    pub fn to_metadata(&self, path: &str) -> String {
        self.mount_prefix
            .replace(path, "${1}/metadata/")
            .into_owned()
    }
}

impl Default for PathNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_metadata_after_mount() {
        let norm = PathNormalizer::new();
        assert_eq!(norm.to_metadata("kv/foo/bar"), "kv/metadata/foo/bar");
    }

    #[test]
    fn test_single_child_path() {
        let norm = PathNormalizer::new();
        assert_eq!(norm.to_metadata("secret/token"), "secret/metadata/token");
    }

    #[test]
    fn test_trailing_slash_directory_path() {
        let norm = PathNormalizer::new();
        assert_eq!(norm.to_metadata("secret/app/"), "secret/metadata/app/");
    }

    #[test]
    fn test_no_separator_is_unchanged() {
        let norm = PathNormalizer::new();
        assert_eq!(norm.to_metadata("secret"), "secret");
    }

    #[test]
    fn test_empty_first_segment_is_unchanged() {
        let norm = PathNormalizer::new();
        assert_eq!(norm.to_metadata("/foo/bar"), "/foo/bar");
    }

    #[test]
    fn test_empty_path_is_unchanged() {
        let norm = PathNormalizer::new();
        assert_eq!(norm.to_metadata(""), "");
    }

    #[test]
    fn test_only_first_segment_is_rewritten() {
        let norm = PathNormalizer::new();
        assert_eq!(norm.to_metadata("kv/a/b/c/d"), "kv/metadata/a/b/c/d");
    }
}
