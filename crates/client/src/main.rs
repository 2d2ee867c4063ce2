//! GCMS Client - composition root binary

use std::sync::Arc;

use gcms_client::infrastructure::LocalIdentityProvider;
use gcms_client::ports::outbound::IdentityPort;
use gcms_client::{create_storage, AppState, ClientConfig};

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = gcms_client::cli::Command::parse(std::env::args().skip(1))?;

    let storage = create_storage(&config);
    let identity: Arc<dyn IdentityPort> = Arc::new(LocalIdentityProvider);
    let mut state = AppState::load(storage, identity);

    tracing::debug!(?command, "Running command");
    gcms_client::cli::run(command, &mut state, &mut std::io::stdout()).await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = ClientConfig::from_env();
    let identity: Arc<dyn IdentityPort> = Arc::new(LocalIdentityProvider);
    let state = AppState::load(create_storage(&config), identity);

    tracing::info!(
        authenticated = state.session().is_authenticated(),
        opportunities = state.collections().opportunities().len(),
        templates = state.collections().templates().len(),
        "GCMS state loaded"
    );
}
