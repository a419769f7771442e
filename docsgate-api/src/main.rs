/*
 * Copyright 2026 RISTEK Fasilkom UI
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Documentation gateway entry point.
//!
//! A standalone Axum service that fronts the generated documentation site
//! with a Google OAuth2 login for the organization.

use docsgate_api::config::Config;
use docsgate_api::routes;
use docsgate_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().expect("failed to load configuration");

    tracing::info!(
        "Protecting docs from {} behind {}",
        config.docs_dir,
        config.base_url
    );

    let state = AppState::new(&config);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind listener");

    tracing::info!("Documentation gateway listening on {}", config.listen_addr);

    axum::serve(listener, app).await.expect("server error");
}
