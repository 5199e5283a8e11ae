#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use inventra_config::BackendKind;
use inventra_extract::CabinetMode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, DecomposeInput, DecomposeStrategy, ExtractInput, ExtractStrategy,
    InfoStrategy, InitStrategy, MovementsInput, MovementsStrategy, TransformInput,
    TransformStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "inventra")]
#[command(about = "Inventory location decomposition tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a location string into cabinet code, responsible person and note
    Decompose {
        /// Location text, e.g. "к.301a Кравченко А.В. расписка"
        text: String,

        /// Cabinet code rendering (raw or canonical)
        #[arg(short = 'm', long)]
        mode: Option<CabinetMode>,
    },
    /// Extract storage place and responsible person with a backend
    Extract {
        text: String,

        /// Backend to use (rule or model)
        #[arg(short = 'b', long)]
        backend: Option<BackendKind>,

        /// Model name for the model backend, overrides config
        #[arg(long)]
        model: Option<String>,
    },
    /// Convert a legacy inventory export into the new table layout
    Transform {
        /// JSON array of legacy rows
        input: PathBuf,
        /// Where to write the transformed rows
        output: PathBuf,

        #[arg(short = 'b', long)]
        backend: Option<BackendKind>,

        #[arg(long)]
        model: Option<String>,
    },
    /// Build movement records from the location column of a legacy export
    Movements { input: PathBuf, output: PathBuf },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Decompose { text, mode } => {
            DecomposeStrategy
                .execute(DecomposeInput { text, mode })
                .await
        }
        Commands::Extract {
            text,
            backend,
            model,
        } => {
            ExtractStrategy
                .execute(ExtractInput {
                    text,
                    backend,
                    model,
                })
                .await
        }
        Commands::Transform {
            input,
            output,
            backend,
            model,
        } => {
            TransformStrategy
                .execute(TransformInput {
                    input,
                    output,
                    backend,
                    model,
                })
                .await
        }
        Commands::Movements { input, output } => {
            MovementsStrategy
                .execute(MovementsInput { input, output })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
