mod app;
mod bootstrap;
mod modules;
mod types;
mod utils;

use crate::{
    app::App,
    types::{Context, ToContext},
    utils::config::Config,
};
use std::sync::Arc;
use tracing_subscriber::{prelude::*, EnvFilter};

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

async fn start(config: Config) -> Result<(), String> {
    let ctx: Arc<Context> = Arc::new(config.to_context().await.map_err(|err| err.to_string())?);

    bootstrap::run(&ctx).await.map_err(|err| err.to_string())?;

    App::new(ctx).serve().await.map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(true);
            tracing::error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    init_tracing(config.app.debug);

    if config.app.default_secret_key {
        tracing::warn!("SECRET_KEY not set, falling back to the development key");
    }

    if let Err(err) = start(config).await {
        tracing::error!("Server failed to start: {}", err);
        std::process::exit(1);
    }
}
