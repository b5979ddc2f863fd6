use std::collections::HashSet;

use crate::auth::Claims;
use crate::config;
use crate::tenant::{TenantContext, TenantKind};

/// Actions a privilege resource supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Get,
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Get => "get",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

// Grants held even without a credential, so the public-within-tenant menu
// entries stay visible before login.
const ADMIN_DEFAULT_AUTHORITIES: &[&str] = &["dashboard:get", "announcement:get"];
const MERCHANT_DEFAULT_AUTHORITIES: &[&str] = &["dashboard:get"];

// Extra grants for dynamically provisioned merchants.
const DYNAMIC_MERCHANT_AUTHORITIES: &[&str] = &["content:get", "report:get"];

/// Effective `resource:action` grants for one request.
#[derive(Debug, Clone, Default)]
pub struct AuthoritySet(HashSet<String>);

impl AuthoritySet {
    /// Builds the effective set: tenant-kind defaults, plus the
    /// dynamic-merchant defaults when the merchant code carries the
    /// provisioning prefix, plus whatever a valid credential grants.
    ///
    /// Callers pass `None` for absent, malformed or expired credentials.
    pub fn resolve(tenant: &TenantContext, claims: Option<&Claims>) -> Self {
        let defaults = match tenant.kind {
            TenantKind::Administrator => ADMIN_DEFAULT_AUTHORITIES,
            TenantKind::Merchant => MERCHANT_DEFAULT_AUTHORITIES,
        };
        let mut set: HashSet<String> = defaults.iter().map(|s| s.to_string()).collect();

        if tenant.kind == TenantKind::Merchant {
            let prefix = &config::config().tenant.dynamic_merchant_prefix;
            let dynamic = claims
                .and_then(|c| c.merchant_code.as_deref())
                .is_some_and(|code| code.starts_with(prefix.as_str()));
            if dynamic {
                set.extend(DYNAMIC_MERCHANT_AUTHORITIES.iter().map(|s| s.to_string()));
            }
        }

        if let Some(claims) = claims {
            set.extend(claims.authorities.iter().cloned());
        }

        Self(set)
    }

    pub fn check(&self, resource: &str, action: Action) -> bool {
        self.0.contains(&format!("{}:{}", resource, action.as_str()))
    }

    /// Conjunctive: every listed action must be granted.
    pub fn check_all(&self, resource: &str, actions: &[Action]) -> bool {
        actions.iter().all(|a| self.check(resource, *a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_tenant() -> TenantContext {
        TenantContext::resolve("/acme/member-management")
    }

    fn merchant_tenant() -> TenantContext {
        TenantContext::resolve("/acme/merchant/dashboard")
    }

    fn claims(authorities: &[&str], merchant_code: Option<&str>) -> Claims {
        Claims {
            subject: "someone".to_string(),
            exp: i64::MAX,
            authorities: authorities.iter().map(|s| s.to_string()).collect(),
            merchant_code: merchant_code.map(|s| s.to_string()),
        }
    }

    #[test]
    fn defaults_present_without_credential() {
        let set = AuthoritySet::resolve(&admin_tenant(), None);
        assert!(set.check("dashboard", Action::Get));
        assert!(set.check("announcement", Action::Get));
        assert!(!set.check("member", Action::Get));
    }

    #[test]
    fn credential_authorities_union_with_defaults() {
        let claims = claims(&["member:get", "member:update"], None);
        let set = AuthoritySet::resolve(&admin_tenant(), Some(&claims));
        assert!(set.check("dashboard", Action::Get));
        assert!(set.check("member", Action::Get));
        assert!(set.check("member", Action::Update));
    }

    #[test]
    fn multi_action_check_is_conjunctive() {
        let claims = claims(&["member:get", "member:update"], None);
        let set = AuthoritySet::resolve(&admin_tenant(), Some(&claims));
        assert!(set.check_all("member", &[Action::Get, Action::Update]));
        assert!(!set.check_all("member", &[Action::Get, Action::Delete]));
    }

    #[test]
    fn dynamic_merchant_gains_extra_defaults() {
        let provisioned = claims(&[], Some("dm-1042"));
        let set = AuthoritySet::resolve(&merchant_tenant(), Some(&provisioned));
        assert!(set.check("content", Action::Get));
        assert!(set.check("report", Action::Get));

        let regular = claims(&[], Some("store-9"));
        let set = AuthoritySet::resolve(&merchant_tenant(), Some(&regular));
        assert!(!set.check("content", Action::Get));
    }

    #[test]
    fn dynamic_prefix_ignored_for_administrator_tenants() {
        let provisioned = claims(&[], Some("dm-1042"));
        let set = AuthoritySet::resolve(&admin_tenant(), Some(&provisioned));
        assert!(!set.check("content", Action::Get));
    }
}
