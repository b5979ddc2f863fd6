use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub locale: LocaleConfig,
    pub session: SessionConfig,
    pub tenant: TenantConfig,
    pub routing: RoutingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Locale tags the portals are translated into.
    pub supported: Vec<String>,
    /// Locale used when an unlocalized URL has to be re-issued.
    pub default_locale: String,
    /// Sentinel locale value meaning "no locale chosen yet".
    pub sentinel: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Credential cookie for administrator-tenant sessions.
    pub admin_cookie: String,
    /// Credential cookie for merchant-tenant sessions.
    pub merchant_cookie: String,
    /// Locale preference cookie.
    pub locale_cookie: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantConfig {
    /// Tenant code assumed when the path carries no segment at all.
    pub fallback_code: String,
    /// Merchant codes with this prefix are dynamically provisioned and
    /// receive an extra default authority set.
    pub dynamic_merchant_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Framework-internal asset prefix, always public.
    pub framework_prefix: String,
    /// Path segment marking an API passthrough request.
    pub api_segment: String,
}

impl LocaleConfig {
    pub fn is_supported(&self, tag: &str) -> bool {
        self.supported.iter().any(|l| l == tag)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    fn defaults() -> Self {
        Self {
            locale: LocaleConfig {
                supported: vec!["en".to_string(), "ko".to_string(), "zh".to_string()],
                default_locale: "en".to_string(),
                sentinel: "default".to_string(),
            },
            session: SessionConfig {
                admin_cookie: "admin_token".to_string(),
                merchant_cookie: "merchant_token".to_string(),
                locale_cookie: "portal_locale".to_string(),
            },
            tenant: TenantConfig {
                fallback_code: "portal".to_string(),
                dynamic_merchant_prefix: "dm".to_string(),
            },
            routing: RoutingConfig {
                framework_prefix: "/_app".to_string(),
                api_segment: "api".to_string(),
            },
        }
    }

    fn with_env_overrides(mut self) -> Self {
        // Locale overrides
        if let Ok(v) = env::var("PORTAL_SUPPORTED_LOCALES") {
            self.locale.supported = v.split(',').map(|s| s.trim().to_string()).collect();
        }
        if let Ok(v) = env::var("PORTAL_DEFAULT_LOCALE") {
            self.locale.default_locale = v;
        }

        // Session overrides
        if let Ok(v) = env::var("PORTAL_ADMIN_COOKIE") {
            self.session.admin_cookie = v;
        }
        if let Ok(v) = env::var("PORTAL_MERCHANT_COOKIE") {
            self.session.merchant_cookie = v;
        }
        if let Ok(v) = env::var("PORTAL_LOCALE_COOKIE") {
            self.session.locale_cookie = v;
        }

        // Tenant overrides
        if let Ok(v) = env::var("PORTAL_FALLBACK_TENANT") {
            self.tenant.fallback_code = v;
        }
        if let Ok(v) = env::var("PORTAL_DYNAMIC_MERCHANT_PREFIX") {
            self.tenant.dynamic_merchant_prefix = v;
        }

        // Routing overrides
        if let Ok(v) = env::var("PORTAL_FRAMEWORK_PREFIX") {
            self.routing.framework_prefix = v;
        }
        if let Ok(v) = env::var("PORTAL_API_SEGMENT") {
            self.routing.api_segment = v;
        }

        self
    }
}

// Global singleton config - initialized once at startup. Static configuration
// only; per-request tenant/credential state lives in RequestContext.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
