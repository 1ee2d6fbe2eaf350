use anyhow::Context;
use log::info;
use salary_dash::{DashboardConfig, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::from_env();
    if !config.dataset_path.exists() {
        log::warn!("Dataset not found yet: {}", config.dataset_path.display());
    }
    if !config.pipeline_path.exists() {
        log::warn!("Pipeline artifact not found yet: {}", config.pipeline_path.display());
    }

    info!("Starting salary dashboard on {}", config.bind_addr);
    let addr = config.bind_addr;
    serve(config)
        .await
        .with_context(|| format!("Dashboard server on {addr} failed"))?;

    Ok(())
}
