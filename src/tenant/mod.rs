use crate::config;

/// The two workspace kinds served by the portals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantKind {
    Administrator,
    Merchant,
}

/// Tenant identity derived from the request path.
///
/// Recomputed on every request and never cached: the prefix is path-derived
/// and must always reflect the current URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub kind: TenantKind,
    /// First non-empty path segment, or the configured fallback on `/`.
    pub code: String,
    /// Path prefix the tenant's routes live under, no surrounding slashes.
    pub prefix: String,
}

impl TenantContext {
    /// Derives the tenant for a locale-stripped request path.
    ///
    /// A `merchant` segment after the tenant code marks a merchant workspace
    /// and extends the prefix to `{code}/merchant`.
    pub fn resolve(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let code = match segments.next() {
            Some(seg) => seg.to_string(),
            None => config::config().tenant.fallback_code.clone(),
        };
        let is_merchant = segments.any(|s| s == "merchant");

        let (kind, prefix) = if is_merchant {
            (TenantKind::Merchant, format!("{}/merchant", code))
        } else {
            (TenantKind::Administrator, code.clone())
        };

        Self { kind, code, prefix }
    }

    /// Path inside the tenant space: the request path with the tenant prefix
    /// removed and any trailing slash trimmed. Empty means the tenant root.
    pub fn strip_prefix<'a>(&self, path: &'a str) -> &'a str {
        let inside = path
            .strip_prefix('/')
            .and_then(|p| p.strip_prefix(self.prefix.as_str()))
            .unwrap_or(path);
        inside.trim_end_matches('/')
    }
}
