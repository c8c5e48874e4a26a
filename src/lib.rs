//! Trip itinerary planner.
//!
//! Accepts trip parameters over HTTP and chains prompts to a text-generation
//! model to produce an overview, a day-by-day plan, dining suggestions, a
//! packing list, a fun fact and a Google Maps directions link.

use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

pub mod ai;
pub mod api;
pub mod config;
pub mod currency;
pub mod itinerary;
pub mod locations;
pub mod messages;
pub mod system_info;
pub mod tips;
pub mod trip;

#[cfg(test)]
mod tests;

pub use ai::{GeminiClient, TextGenerator};
pub use api::{router as api_router, ApiConfig, AppState};
pub use config::Config;
pub use itinerary::{generate_itinerary, GeneratedItinerary};
pub use locations::{maps_link, parse_locations};
pub use system_info::get_system_info;
pub use trip::{TripError, TripForm, TripRequest};

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting trip planner...");
    tracing::debug!(info = %get_system_info(), "Build information");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Invalid configuration");
            return Err(err);
        }
    };

    serve(config).await
}

/// Bind the configured address and serve the API until Ctrl-C.
pub async fn serve(config: Config) -> Result<()> {
    let generator = Arc::new(GeminiClient::new(config.ai));
    tracing::info!(model = generator.model(), "Using Gemini model");
    let app = api_router(AppState::new(generator), config.api);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Web server running at http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
