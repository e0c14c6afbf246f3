use clap::Parser;
use client::frame_source::FileFrameSource;
use client::search_api::HttpSearchApi;
use client::session::{CaptureSession, Status};
use color_eyre::Result;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Capture a frame and search the face collection for it", long_about = None)]
struct Args {
    /// JPEG frame kept up to date by the camera tool
    #[arg(long)]
    frame: PathBuf,

    #[arg(long, default_value = "http://localhost:3001")]
    api_url: String,

    /// Keep running, one capture per Enter press
    #[arg(long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "client=warn".into()),
        )
        .init();
    color_eyre::install()?;

    let args = Args::parse();
    let api = HttpSearchApi::new(reqwest::Client::new(), &args.api_url)?;
    let session = CaptureSession::new(FileFrameSource::new(args.frame), api);

    let mut statuses = session.subscribe();
    tokio::spawn(async move {
        while statuses.changed().await.is_ok() {
            let status = statuses.borrow_and_update().clone();
            if !status.is_terminal() {
                println!("{}", status.label());
            }
        }
    });

    if !args.watch {
        let outcome = session.capture_and_search().await?;
        print_outcome(&outcome);
        return Ok(());
    }

    println!("Press Enter to capture, Ctrl-D to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while lines.next_line().await?.is_some() {
        match session.capture_and_search().await {
            Ok(outcome) => print_outcome(&outcome),
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}

fn print_outcome(status: &Status) {
    println!("{}", status.label());
    if let Some(message) = status.error_message() {
        println!("  {message}");
    }
    for result in status.matches() {
        println!("  ID: {}", result.person_id);
        println!("  Similarity: {}%", result.similarity);
        println!("  {}", result.image_url);
    }
}
