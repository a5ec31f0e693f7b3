use anyhow::Result;
use clap::Parser;
use log::debug;
use redpeek::cli::Cli;
use redpeek::config::AppConfig;
use redpeek::operations::handle_command;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    debug!("Using configuration: {:?}", config);

    let client = config.create_client()?;
    handle_command(&cli, client).await?;
    Ok(())
}
