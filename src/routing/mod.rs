use crate::config;

/// Whether a path needs a credential at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public(PublicKind),
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKind {
    /// Authentication-flow pages from the fixed allow-list.
    AuthFlow,
    /// Framework-internal assets and chunks.
    Framework,
    /// API passthrough, authorized downstream by the API itself.
    Api,
    /// Static file matched by trailing extension.
    StaticAsset,
}

/// Pages reachable without a credential.
const AUTH_FLOW_ROUTES: &[&str] = &[
    "login",
    "forgot-password",
    "reset-password",
    "expired-link",
    "not-found",
];

/// Classifies a locale-stripped path. Evaluated before any authority check:
/// public routes stay reachable regardless of credential state.
pub fn classify(path: &str) -> RouteClass {
    let routing = &config::config().routing;

    if path.starts_with(routing.framework_prefix.as_str()) {
        return RouteClass::Public(PublicKind::Framework);
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.iter().any(|s| *s == routing.api_segment) {
        return RouteClass::Public(PublicKind::Api);
    }

    match segments.last() {
        Some(last) if AUTH_FLOW_ROUTES.contains(last) => RouteClass::Public(PublicKind::AuthFlow),
        Some(last) if has_file_extension(last) => RouteClass::Public(PublicKind::StaticAsset),
        _ => RouteClass::Protected,
    }
}

/// Whether the path targets the login page.
pub fn is_login_page(path: &str) -> bool {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .map(|seg| seg == "login")
        .unwrap_or(false)
}

fn has_file_extension(segment: &str) -> bool {
    match segment.rsplit_once('.') {
        Some((name, ext)) => {
            !name.is_empty()
                && !ext.is_empty()
                && ext.len() <= 8
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        }
        None => false,
    }
}
