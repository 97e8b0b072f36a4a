use std::sync::Arc;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use weekly_track::app::{AppContext, Result};
use weekly_track::cli::{commands, Cli, Commands};
use weekly_track::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("weekly_track=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let ctx = AppContext::new(config)?;

    // Failed runs are reported, not propagated as a failing exit status
    if let Err(e) = dispatch(ctx, cli.command).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn dispatch(ctx: AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Fetch { output } => {
            commands::fetch_weekly_update(&ctx, output.as_deref()).await?;
        }
        Commands::Extract {
            file,
            title,
            output,
        } => {
            commands::extract_file(&ctx, &file, title.as_deref(), output.as_deref())?;
        }
        Commands::Resolve { input, output } => {
            commands::resolve_vehicles(&ctx, input.as_deref(), output.as_deref()).await?;
        }
        Commands::Run => {
            commands::run(&ctx).await?;
        }
        Commands::Debug => {
            commands::debug_post(&ctx).await?;
        }
        Commands::Show => {
            commands::show(&ctx)?;
        }
        Commands::Tui => {
            weekly_track::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
