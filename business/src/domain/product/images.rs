/// Base location of the public image storage.
///
/// Catalog rows store opaque storage paths; the storefront needs absolute
/// URLs. Some legacy rows carry the bucket name inside the path as well, so
/// resolution strips that prefix before joining.
#[derive(Debug, Clone)]
pub struct ImageBase {
    public_url: String,
    bucket: String,
}

impl ImageBase {
    pub fn new(public_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            public_url: public_url.into().trim_end_matches('/').to_string(),
            bucket: bucket.into().trim_matches('/').to_string(),
        }
    }

    /// Resolves a stored path to a public URL. Missing or blank paths
    /// resolve to `None`.
    pub fn resolve(&self, path: Option<&str>) -> Option<String> {
        let path = path?.trim().trim_start_matches('/');
        if path.is_empty() {
            return None;
        }
        let bucket_prefix = format!("{}/", self.bucket);
        let object = path.strip_prefix(&bucket_prefix).unwrap_or(path);
        Some(format!("{}/{}/{}", self.public_url, self.bucket, object))
    }

    /// Resolves a gallery of stored paths, dropping the unresolvable ones.
    pub fn resolve_many(&self, paths: &[String]) -> Vec<String> {
        paths
            .iter()
            .filter_map(|path| self.resolve(Some(path)))
            .collect()
    }
}
