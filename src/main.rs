use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::{bail, Result};
use invoice_generator::api::{configure_routes, ApiState, AppConfig};
use std::env;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Invoice Generator API");

    // Load configuration; missing secrets abort startup
    let config = load_config()?;

    // Initialize application state
    let state = web::Data::new(ApiState::new(config));

    // Get server settings
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()?;

    tracing::info!("Starting server on {}:{}", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}

fn cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|origin, _req_head| {
            origin.as_bytes().starts_with(b"http://localhost")
                || origin.as_bytes().starts_with(b"https://")
        })
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec!["Content-Type"])
        .max_age(3600)
}

fn load_config() -> Result<AppConfig> {
    let jwt_secret = match env::var("JWT_SECRET") {
        Ok(v) if !v.is_empty() => v,
        _ => bail!("JWT_SECRET missing in environment"),
    };
    let data_secret = match env::var("SECRET_KEY") {
        Ok(v) if !v.is_empty() => v,
        _ => bail!("SECRET_KEY missing in environment"),
    };

    Ok(AppConfig {
        jwt_secret,
        data_secret,
        invoice_dir: env::var("INVOICE_DIR")
            .unwrap_or_else(|_| "invoices".to_string())
            .into(),
        token_ttl_minutes: env::var("TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()?,
    })
}
