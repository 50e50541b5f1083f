use clap::Parser;

mod cli;

use cli::{Cli, Commands};
use youtube_partner_core::config::load_config_with_source;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, config_source) = load_config_with_source(cli.config.clone())?;
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("youtube_partner={}", level).parse()?)
                .add_directive(format!("youtube_partner_core={}", level).parse()?),
        )
        .init();

    match &config_source {
        Some(path) => tracing::info!("Using config {:?}", path),
        None => tracing::info!("No config file found, using defaults"),
    }

    match cli.command {
        Commands::Methods { resource } => {
            cli::commands::methods::run(resource.as_deref());
        }
        Commands::Call(args) => {
            cli::commands::call::run(config, args).await?;
        }
        Commands::Generate { discovery } => {
            cli::commands::generate::run(&discovery)?;
        }
        Commands::Status => {
            cli::commands::status::run(&config, config_source.as_deref()).await?;
        }
    }

    Ok(())
}
