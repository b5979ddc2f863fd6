use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;

use portal_guard::auth::Claims;

/// Mints a structurally real signed token. The guard never verifies the
/// signature, but production credentials are signed JWTs and the tests
/// should look like them.
pub fn token(authorities: &[&str], merchant_code: Option<&str>, ttl_secs: i64) -> String {
    let claims = Claims {
        subject: "it-tester".to_string(),
        exp: (Utc::now() + Duration::seconds(ttl_secs)).timestamp(),
        authorities: authorities.iter().map(|s| s.to_string()).collect(),
        merchant_code: merchant_code.map(|s| s.to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"portal-test-secret"),
    )
    .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn location(response: &Response) -> Option<String> {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
