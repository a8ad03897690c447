use std::{env, net::SocketAddr, sync::Arc};

use tracing_subscriber::EnvFilter;

use crate::{
    app::env::Envy,
    generations::apis::{
        hugging_face::service::HuggingFaceClient, inference_provider::InferenceProvider,
    },
};

mod app;
mod generations;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub provider: Arc<dyn InferenceProvider>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("canvas_api=debug,tower_http=info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let provider = match HuggingFaceClient::from_envy(&envy) {
        Ok(client) => client,
        Err(e) => panic!("failed to build inference client: {:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    tracing::info!("starting in {} mode, sharing as {}", envy.app_env, envy.app_url);

    let state = AppState {
        envy: Arc::new(envy),
        provider: Arc::new(provider),
    };

    let app = app::router::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", e);
    }
}
