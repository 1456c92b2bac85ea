use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docstudy::infrastructure::observability::{TracingConfig, init_tracing};
use docstudy::infrastructure::provider_factory::build_provider_gateway;
use docstudy::infrastructure::storage::StorageFactory;
use docstudy::infrastructure::text_processing::CompositeFileLoader;
use docstudy::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment))
        .context("Failed to initialise tracing")?;

    let storage = StorageFactory::create(&settings.storage)
        .await
        .context("Failed to open storage")?;
    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let gateway = build_provider_gateway(&settings).context("Failed to configure providers")?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState::new(settings, storage.documents, storage.files, file_loader, gateway);
    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(environment = environment.as_str(), "Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
