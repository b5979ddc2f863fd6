use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by the portal bearer credential.
///
/// The credential is issued by an external identity provider; this layer only
/// reads the payload segment. A missing claim decays to an empty default,
/// never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Authenticated subject.
    #[serde(rename = "user_name", default)]
    pub subject: String,
    /// Expiry, seconds since epoch.
    #[serde(default)]
    pub exp: i64,
    /// Granted `resource:action` tokens.
    #[serde(default)]
    pub authorities: Vec<String>,
    /// Tenant-scoped identifier, present for merchant sessions.
    #[serde(
        rename = "merchantCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub merchant_code: Option<String>,
}

impl Claims {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        is_expired(self.exp, now)
    }
}

/// A credential is expired the instant `now` reaches `exp`.
pub fn is_expired(exp: i64, now: DateTime<Utc>) -> bool {
    now.timestamp() >= exp
}

/// Decodes the payload segment of a bearer credential into claims.
///
/// No signature verification happens here: the result gates UI routing only,
/// and every privileged API call is re-verified server-side. Anything that
/// does not parse is reported as `None` and treated upstream as "no
/// credential".
pub fn decode_credential(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}
