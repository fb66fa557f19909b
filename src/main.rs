use anyhow::Context;
use clap::Parser;
use fealog_core::{config::Config, export, viewer_state::ViewerStateBuilder, Pipeline};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fealog",
    about = "Convert FEA, Assimilation and Native logs into a central-logger viewer bundle"
)]
struct Cli {
    /// Folder containing the log files. Defaults to the current directory.
    folder: Option<PathBuf>,

    /// Where to write log0.json, log_state.json and the FEA audit log.
    /// Defaults to the input folder.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extra config file (TOML, YAML or JSON) layered over the defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of RUST_LOG.
    #[arg(long)]
    debug: bool,

    /// Append converter logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let folder = match cli.folder {
        Some(folder) => folder,
        None => std::env::current_dir()?,
    };

    tracing::info!("loading config");
    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    let mut pipeline = Pipeline::new(&config).context("invalid config")?;

    tracing::info!(folder = %folder.display(), "reading log files");
    let discovery = fealog_feeds::discover(&folder).context("failed to list log files")?;
    for error in &discovery.unreadable {
        pipeline.skip_unreadable(&display_path(error), error);
    }
    for path in &discovery.files {
        tracing::info!(file = %path.display(), "processing");
        match fealog_feeds::read_source(path) {
            Ok(source) => pipeline.ingest(&source),
            Err(e) => pipeline.skip_unreadable(&path.display().to_string(), &e),
        }
    }
    tracing::info!(files = discovery.files.len(), "total files found");

    let output = pipeline.finish();
    let state = ViewerStateBuilder::new(output.client_names()).build();

    let out_dir = cli.output.unwrap_or(folder);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    export::write_bundle(&out_dir, &output, &state)?;

    Ok(())
}

fn display_path(error: &fealog_feeds::FeedError) -> String {
    error
        .path()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string())
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let filter = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
    }

    Ok(())
}
