//! Jukebox - buy play credits, queue tracks and watch what is playing
//!
//! The service owns a credit ledger and a playback queue on top of a
//! read-only album catalog. A background player drains the queue.

#![allow(dead_code)]

mod api;
mod config;
mod core;
mod error;
mod models;
mod stores;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::{LogFormat, Settings};
use crate::core::JukeboxService;

/// Jukebox playback service
#[derive(Parser, Debug)]
#[command(name = "jukebox")]
#[command(version)]
#[command(about = "Buy play credits, queue tracks and watch what is playing")]
struct Args {
    /// Host address to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Catalog location, e.g. file:///srv/catalog.json
    #[arg(long)]
    catalog: Option<String>,

    /// Path to a settings file (toml, json, yaml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings =
        Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    apply_args(&mut settings, &args);

    init_logging(&settings);
    info!("Jukebox v{} starting...", env!("CARGO_PKG_VERSION"));

    run(settings).await
}

/// Command line flags win over file and environment settings
fn apply_args(settings: &mut Settings, args: &Args) {
    if let Some(host) = &args.host {
        settings.http.host = host.clone();
    }
    if let Some(port) = args.port {
        settings.http.port = port;
    }
    if let Some(catalog) = &args.catalog {
        settings.discography.url = catalog.clone();
    }
    if args.debug {
        settings.logger.level = "debug".to_string();
    }
}

fn init_logging(settings: &Settings) {
    // keep the HTTP stack quiet unless asked for
    let filter = tracing_subscriber::EnvFilter::new(format!(
        "{},actix_server=warn,actix_web=info",
        settings.logger.level
    ));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    match settings.logger.format {
        LogFormat::Json => builder.json().with_thread_ids(true).init(),
        LogFormat::Compact => builder.with_thread_ids(false).compact().init(),
    }
}

async fn run(settings: Settings) -> Result<()> {
    // Build the components
    info!("Loading catalog...");
    let catalog = stores::catalog_from_config(&settings)?;
    let queue = stores::queue_from_config(&settings)?;
    info!("Queue holds up to {} tracks", queue.capacity());
    let ledger = stores::ledger_from_config(&settings)?;
    let player = crate::core::player::from_config(&settings, catalog.clone(), queue.clone())?;

    let service = Arc::new(JukeboxService::new(
        catalog,
        queue,
        player.clone(),
        ledger,
    ));

    info!("Starting player...");
    player.start()?;

    let addr = settings.bind_addr();
    info!("Server listening on http://{}", addr);

    use actix_cors::Cors;
    use actix_web::{middleware, web, App, HttpServer};

    let data = web::Data::from(service);
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(data.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(api::configure)
    })
    .bind(&addr)
    .with_context(|| format!("Failed to bind {}", addr))?
    .run()
    .await;

    info!("Shutting down player...");
    player.stop().await;

    server?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_settings() {
        let args = Args::parse_from([
            "jukebox",
            "--port",
            "8080",
            "--catalog",
            "file://catalog.json",
            "--debug",
        ]);
        let mut settings = Settings::default();
        apply_args(&mut settings, &args);

        assert_eq!(settings.http.port, 8080);
        assert_eq!(settings.http.host, "127.0.0.1");
        assert_eq!(settings.discography.url, "file://catalog.json");
        assert_eq!(settings.logger.level, "debug");
    }
}
