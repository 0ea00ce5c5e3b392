use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tpay::config::{Config, LogFormat};
use tpay::middleware::RequestId;
use tpay::payments::{TokenCache, TpayClient};
use tpay::webhooks::{self, WebhookHandler};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting TPay webhook receiver");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Gateway endpoint: {}", config.gateway.base_url);

    let client = TpayClient::from_config(&config.gateway);
    // Bounded by Config::validate
    let margin = chrono::Duration::seconds(config.gateway.token_refresh_margin_secs as i64);
    let tokens = Arc::new(TokenCache::new(client.clone(), margin));
    let handler = web::Data::new(WebhookHandler::new(client, tokens));

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let handler = handler.clone();
        App::new()
            .wrap(RequestId)
            .configure(|cfg| webhooks::configure(cfg, handler))
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Webhook server is listening at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("tpay={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
