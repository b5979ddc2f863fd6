use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use crate::auth::{self, Claims};
use crate::authority::AuthoritySet;
use crate::config;
use crate::decision::{decide, DecisionInput, Verdict};
use crate::routing;
use crate::tenant::{TenantContext, TenantKind};

/// Immutable request-scoped authorization context, injected for downstream
/// handlers on every allowed request. Tenant and credential state never
/// outlive the request.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub locale: String,
    /// Locale-stripped request path.
    pub path: String,
    pub tenant: TenantContext,
    /// Decoded, unexpired claims, when present.
    pub claims: Option<Claims>,
    pub authorities: AuthoritySet,
}

/// The per-request gate: resolves locale and tenant, decodes the credential
/// cookie, classifies the route and applies the redirect decision before any
/// page logic runs.
pub async fn guard_middleware(mut request: Request, next: Next) -> Response {
    let config = config::config();
    let uri = request.uri().clone();
    let (locale, path) = split_locale(uri.path());

    let tenant = TenantContext::resolve(path);
    let class = routing::classify(path);

    let cookie_name = match tenant.kind {
        TenantKind::Administrator => &config.session.admin_cookie,
        TenantKind::Merchant => &config.session.merchant_cookie,
    };
    let claims = cookie_value(request.headers(), cookie_name)
        .and_then(|token| auth::decode_credential(&token));
    let now = Utc::now();
    let valid_claims = claims.filter(|c| !c.is_expired_at(now));
    let has_valid_credential = valid_claims.is_some();

    let verdict = decide(&DecisionInput {
        path,
        locale,
        tenant: &tenant,
        has_valid_credential,
        class,
    });
    tracing::debug!(path = uri.path(), ?verdict, "request verdict");

    match verdict {
        Verdict::Allow => {
            let authorities = AuthoritySet::resolve(&tenant, valid_claims.as_ref());
            request.extensions_mut().insert(RequestContext {
                locale: locale.to_string(),
                path: path.to_string(),
                tenant,
                claims: valid_claims,
                authorities,
            });
            next.run(request).await
        }
        Verdict::RedirectForLocale => {
            let target_locale = preferred_locale(request.headers());
            let query = uri.query().map(|q| format!("?{}", q)).unwrap_or_default();
            Redirect::temporary(&format!("/{}{}{}", target_locale, path, query)).into_response()
        }
        Verdict::RedirectToLogin { referer } => {
            let target = match referer {
                Some(referer) => format!("/{}/login?referer={}", tenant.prefix, referer),
                None => format!("/{}/login", tenant.prefix),
            };
            Redirect::temporary(&target).into_response()
        }
        Verdict::RedirectToTenantRoot => {
            Redirect::temporary(&format!("/{}/", tenant.prefix)).into_response()
        }
    }
}

/// Splits a request path into (locale, remaining path). The first segment is
/// the locale when it names a supported tag or the sentinel; otherwise the
/// URL has no locale yet and the sentinel is reported.
fn split_locale(path: &str) -> (&str, &str) {
    let locale_config = &config::config().locale;
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let first = trimmed.split('/').next().unwrap_or("");

    if !first.is_empty() && (first == locale_config.sentinel || locale_config.is_supported(first)) {
        let rest = &path[1 + first.len()..];
        let rest = if rest.is_empty() { "/" } else { rest };
        (&path[1..1 + first.len()], rest)
    } else {
        (locale_config.sentinel.as_str(), path)
    }
}

/// Locale to re-issue an unlocalized URL under: the preference cookie when it
/// names a supported tag, the configured default otherwise.
fn preferred_locale(headers: &HeaderMap) -> String {
    let config = config::config();
    cookie_value(headers, &config.session.locale_cookie)
        .filter(|tag| config.locale.is_supported(tag))
        .unwrap_or_else(|| config.locale.default_locale.clone())
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
