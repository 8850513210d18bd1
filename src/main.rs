//! Server entrypoint for the consultation service
//!
//! Wires configuration, the session repository, the question catalog and the
//! rule engine together and serves the HTTP API.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use consultation_service::adapters::catalog::load_catalog;
use consultation_service::adapters::http::{app_router, ConsultationAppState};
use consultation_service::adapters::memory::InMemorySessionRepository;
use consultation_service::application::ConsultationService;
use consultation_service::config::AppConfig;
use consultation_service::domain::consultation::QuestionCatalog;
use consultation_service::domain::prescription::PrescriptionRuleEngine;
use consultation_service::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;

    telemetry::init(&config.server);

    let catalog = match &config.catalog.path {
        Some(path) => load_catalog(path)
            .await
            .with_context(|| format!("loading question catalog from {}", path.display()))?,
        None => QuestionCatalog::standard(),
    };
    info!(questions = catalog.len(), "Question catalog ready");

    // === Dependency Injection ===
    let repository = Arc::new(InMemorySessionRepository::new());
    let service = ConsultationService::new(catalog, repository, PrescriptionRuleEngine::standard());
    let app = app_router(ConsultationAppState::new(service), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    info!(%addr, environment = ?config.server.environment, "Consultation service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Consultation service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
