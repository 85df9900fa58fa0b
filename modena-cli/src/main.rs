use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use modena_cli::app_config::Config;
use modena_cli::render::OutputFormat;
use modena_cli::{load_catalog, run};

/// Car configuration showroom and checkout.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Catalog file overriding both the configured path and the
    /// built-in showroom.
    catalog: Option<PathBuf>,

    /// Emit a JSON summary instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is reserved for the report itself.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "modena_cli=info,modena_core=info,modena_catalog=info,modena_order=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("failed to load configuration")?;
    let catalog = load_catalog(&config, cli.catalog.as_deref())?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let report = run(&config, &catalog, format)?;
    print!("{report}");
    Ok(())
}
