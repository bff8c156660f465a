use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use pos_pricing::config::{Config, LogFormat};
use pos_pricing::middleware::{ErrorLogger, RequestId};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting POS subscription pricing service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    tracing::info!(
        currency = %config.billing.currency,
        checkout_path = %config.billing.checkout_path,
        "Billing configuration loaded"
    );

    let bind_address = config.server.bind_address();
    let cors_origin = config.server.cors_allowed_origin.clone();
    let configure = pos_pricing::configure_app(&config.billing);

    let server = HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header()
                .max_age(3600),
            None => Cors::default(),
        };

        App::new()
            .wrap(ErrorLogger)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .configure(configure.clone())
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("pos_pricing={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
