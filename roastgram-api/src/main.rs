use roastgram_app::{AppConfig, AppContext};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_context = match AppContext::from_config(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to initialize services: {}", e);
            std::process::exit(1);
        }
    };

    let app = roastgram_api::router(app_context);

    tracing::info!("Listening on http://{}", config.bind_addr);
    tracing::info!(
        "Rate limit: {} requests per {}s per client",
        config.rate_limit.max_requests,
        config.rate_limit.window.as_secs()
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
