use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use schedule_pay::api::{AppState, create_router};
use schedule_pay::batch::{RunOverrides, run_report};
use schedule_pay::config::{ConfigLoader, OutputFormat};

#[derive(Parser)]
#[command(name = "schedule-pay", version, about = "Weekly payment calculator for employee schedules")]
struct Cli {
    /// YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate the payment of every employee in a schedule file.
    Calculate {
        /// Schedule file, one employee per line. Prompted for when omitted.
        file: Option<PathBuf>,

        /// Report format, overriding the configuration.
        #[arg(long, value_enum)]
        format: Option<Format>,

        /// Skip invalid lines instead of stopping at the first one.
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Serve the HTTP API.
    Serve {
        /// Address to listen on, overriding the configuration.
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn prompt_for_path() -> anyhow::Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter data file path: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

fn calculate(
    config: &ConfigLoader,
    file: Option<PathBuf>,
    format: Option<Format>,
    skip_invalid: bool,
) -> anyhow::Result<ExitCode> {
    let path = match file {
        Some(path) => path,
        None => prompt_for_path()?,
    };
    let overrides = RunOverrides {
        skip_invalid,
        format: format.map(OutputFormat::from),
    };

    let complete = run_report(
        config,
        &path,
        overrides,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(if complete {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn serve(config: ConfigLoader, bind: Option<String>) -> anyhow::Result<()> {
    let address = bind.unwrap_or_else(|| config.bind_address().to_string());
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(address = %address, "Serving schedule pay API");
    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ConfigLoader::load_or_default(cli.config.as_ref())?;

    match cli.command {
        Command::Calculate {
            file,
            format,
            skip_invalid,
        } => calculate(&config, file, format, skip_invalid),
        Command::Serve { bind } => {
            serve(config, bind).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
