mod app;
mod config;
mod domain;
mod models;
mod ui;

use clap::Parser;
use gpui::Application;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Settings};
use crate::ui::FileAssets;

const DEFAULT_LOG_FILTER: &str = "chess_view=info";

fn init_logging(cli: &Cli) {
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.print_schema {
        println!("{}", Settings::schema()?);
        return Ok(());
    }

    init_logging(&cli);
    let settings = cli.resolve()?;
    tracing::info!(
        "[APP] Starting: white {}, black {}",
        settings.setup.white.label(),
        settings.setup.black.label()
    );

    Application::new()
        .with_assets(FileAssets::new())
        .run(move |cx| {
            if let Err(err) = app::run(cx, settings) {
                tracing::error!("[APP] Failed to open window: {:#}", err);
                cx.quit();
            }
        });
    Ok(())
}
