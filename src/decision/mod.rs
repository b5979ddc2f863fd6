use url::form_urlencoded;

use crate::config;
use crate::routing::{self, PublicKind, RouteClass};
use crate::tenant::TenantContext;

/// Outcome of the redirect decision for one request. Produced fresh per
/// request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    /// The URL carries no locale yet; re-issue it under one.
    RedirectForLocale,
    /// Send the caller to the tenant login page, optionally carrying the
    /// URL-encoded in-tenant path to return to afterwards.
    RedirectToLogin { referer: Option<String> },
    /// An authenticated caller has no business on the login page.
    RedirectToTenantRoot,
}

/// Everything the decision needs, gathered once per request.
#[derive(Debug)]
pub struct DecisionInput<'a> {
    /// Locale-stripped request path.
    pub path: &'a str,
    /// Request locale; the configured sentinel means "none chosen yet".
    pub locale: &'a str,
    pub tenant: &'a TenantContext,
    /// A decoded, unexpired credential is present. Malformed and expired
    /// credentials are both reported as `false`.
    pub has_valid_credential: bool,
    pub class: RouteClass,
}

/// Maps a request to a verdict. Rules are tried in order, first match wins:
///
/// 1. framework-internal, API and static paths pass untouched;
/// 2. an unlocalized URL is re-issued under a locale before anything else;
/// 3. allow-list pages pass, except the login page for an authenticated
///    caller, which bounces to the tenant root;
/// 4. protected paths without a valid credential go to login, carrying the
///    in-tenant path as `referer` unless the caller was at the tenant root;
/// 5. everything else passes.
pub fn decide(input: &DecisionInput<'_>) -> Verdict {
    if matches!(
        input.class,
        RouteClass::Public(PublicKind::Framework | PublicKind::Api | PublicKind::StaticAsset)
    ) {
        return Verdict::Allow;
    }

    if input.locale == config::config().locale.sentinel {
        return Verdict::RedirectForLocale;
    }

    if input.class == RouteClass::Public(PublicKind::AuthFlow) {
        if routing::is_login_page(input.path) && input.has_valid_credential {
            return Verdict::RedirectToTenantRoot;
        }
        return Verdict::Allow;
    }

    if !input.has_valid_credential {
        let inside = input.tenant.strip_prefix(input.path);
        if inside.is_empty() {
            // Nothing meaningful to return to from the tenant root.
            return Verdict::RedirectToLogin { referer: None };
        }
        let referer: String = form_urlencoded::byte_serialize(inside.as_bytes()).collect();
        return Verdict::RedirectToLogin {
            referer: Some(referer),
        };
    }

    Verdict::Allow
}
