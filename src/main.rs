use anyhow::Context;
use clap::Parser;
use gcs_layout::store::DEFAULT_GCLOUD;
use gcs_layout::{read_config, reconcile_config, GcloudStorage, RunOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Generate the folders and files a GCSFuse benchmark expects in a bucket,
/// skipping the work when the bucket already matches the layout file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON layout file describing the bucket and its folders
    #[arg(env = "GCS_LAYOUT_CONFIG")]
    config: PathBuf,

    /// Only report whether the bucket matches; never delete or upload
    #[arg(short = 'n', long, env = "GCS_LAYOUT_DRY_RUN")]
    dry_run: bool,

    /// Directory for staging generated files before upload (defaults to the system temp dir)
    #[arg(long, env = "GCS_LAYOUT_STAGING_DIR")]
    staging_dir: Option<PathBuf>,

    /// gcloud binary to invoke
    #[arg(long, env = "GCS_LAYOUT_GCLOUD", default_value = DEFAULT_GCLOUD)]
    gcloud: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = read_config(&args.config)
        .await
        .with_context(|| format!("Failed to read layout config {}", args.config.display()))?;

    let store = GcloudStorage::system().with_program(args.gcloud);
    let options = RunOptions {
        dry_run: args.dry_run,
        staging_dir: args.staging_dir.unwrap_or_else(std::env::temp_dir),
    };

    let code = reconcile_config(&store, &config, &options).await;
    Ok(ExitCode::from(code as u8))
}
