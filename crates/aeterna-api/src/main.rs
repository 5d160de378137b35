use aeterna_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    aeterna_api::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded and validated successfully");

    // Initialize the application (services, routes)
    let (_state, router) = aeterna_api::setup::initialize_app(config.clone())?;

    // Start the server
    aeterna_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
