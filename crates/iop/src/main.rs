mod cli;
mod resolve;

use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate { project, app, host } => {
            println!("{}", iop_sslip::generate_app_sslip_domain(&project, &app, &host));
        }
        Command::Resolve { config, json } => {
            let config = match iop_config::parse_iop_toml(&config).await {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Failed to load deployment config: {}", e);
                    return Err(e.into());
                }
            };

            let resolved = resolve::resolve_config(&config);

            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                for app in &resolved {
                    for host in &app.hosts {
                        println!("{}\t{}", app.app, host);
                    }
                }
            }
        }
    }

    Ok(())
}
