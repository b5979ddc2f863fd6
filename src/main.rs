use portal_guard::{app, config};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up cookie names, locales, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!(
        default_locale = %config.locale.default_locale,
        fallback_tenant = %config.tenant.fallback_code,
        "starting portal-guard"
    );

    // Allow tests or deployments to override port via env
    let port = std::env::var("PORTAL_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("portal-guard listening on http://{}", bind_addr);

    axum::serve(listener, app::app()).await.expect("server");
}
