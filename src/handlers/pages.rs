use axum::extract::{Extension, RawQuery};
use serde_json::{json, Value};
use url::form_urlencoded;

use crate::error::ApiError;
use crate::menu;
use crate::middleware::{PageResponse, PageResult, RequestContext};
use crate::routing::{self, PublicKind, RouteClass};

/// Single entry point for everything the guard lets through. The real
/// portals hang their CRUD screens here; this surface renders page
/// descriptors instead.
pub async fn dispatch(
    context: Option<Extension<RequestContext>>,
    RawQuery(query): RawQuery,
) -> PageResult<Value> {
    let Extension(context) = context
        .ok_or_else(|| ApiError::internal_server_error("request context missing from request"))?;

    match routing::classify(&context.path) {
        RouteClass::Public(PublicKind::AuthFlow) => auth_flow_page(&context, query.as_deref()),
        // Assets and API passthrough are served by external collaborators;
        // nothing lives here under those paths.
        RouteClass::Public(_) => Err(ApiError::not_found("Not found")),
        RouteClass::Protected => tenant_page(&context),
    }
}

/// Renders an authentication-flow page. The login page echoes the `referer`
/// parameter so the flow can return the caller after a successful login.
fn auth_flow_page(context: &RequestContext, query: Option<&str>) -> PageResult<Value> {
    let page = context
        .path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    // The not-found route exists so unlocalized links have somewhere to
    // land; it renders the 404 view like any other miss.
    if page == "not-found" {
        return Err(ApiError::not_found("Not found"));
    }

    let referer = query.and_then(|q| {
        form_urlencoded::parse(q.as_bytes())
            .find(|(key, _)| key == "referer")
            .map(|(_, value)| value.into_owned())
    });

    Ok(PageResponse::success(json!({
        "page": page,
        "tenant": context.tenant.prefix,
        "locale": context.locale,
        "referer": referer,
    })))
}

/// Renders a protected page when the menu model grants it; a privilege gap
/// renders the not-found view instead. No redirect here - authentication
/// gaps were already handled by the guard.
fn tenant_page(context: &RequestContext) -> PageResult<Value> {
    let inside = context.tenant.strip_prefix(&context.path);

    if !menu::is_page_allowed(inside, context.tenant.kind, &context.authorities) {
        tracing::debug!(
            tenant = %context.tenant.prefix,
            page = inside,
            "page blocked by privilege gate"
        );
        return Err(ApiError::not_found("Not found"));
    }

    let page = if inside.is_empty() { "/" } else { inside };
    Ok(PageResponse::success(json!({
        "page": page,
        "tenant": context.tenant.prefix,
        "locale": context.locale,
        "subject": context.claims.as_ref().map(|c| c.subject.clone()),
        "menu": menu::visible_entries(
            menu::menu_for(context.tenant.kind),
            &context.authorities,
        ),
    })))
}
