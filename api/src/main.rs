use clap::Parser;

use pavilion_api::{config::Config, run_server, tracing_config};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    color_eyre::install().ok();
    dotenv::dotenv().ok();
    let config = Config::parse();

    tracing_config::configure()?;

    let server = run_server(config).await?;
    server.server.await?;

    Ok(())
}
