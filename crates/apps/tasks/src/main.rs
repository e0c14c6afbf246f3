use app_state::{DEFAULT_LIST_FACES_MAX_RESULTS, load_app_settings};
use clap::{Parser, Subcommand};
use color_eyre::Result;
use std::io;
use tasks::task_runner::{Task, run_task};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Maintenance tasks for the face search collection", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register the faces of every image in the bucket, keyed by object key
    BulkIndex,
    /// Print the faces registered in the collection
    ListFaces {
        #[arg(long, default_value_t = DEFAULT_LIST_FACES_MAX_RESULTS)]
        max_results: i32,
    },
    /// Create the configured collection if it does not exist yet
    EnsureCollection,
}

impl From<Command> for Task {
    fn from(command: Command) -> Self {
        match command {
            Command::BulkIndex => Self::BulkIndex,
            Command::ListFaces { max_results } => Self::ListFaces { max_results },
            Command::EnsureCollection => Self::EnsureCollection,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let settings = load_app_settings()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            settings
                .logging
                .directives(&["tasks", "common_services"])
                .into()
        }))
        .init();
    run_task(&settings, args.command.into(), &mut io::stdout()).await?;

    Ok(())
}
