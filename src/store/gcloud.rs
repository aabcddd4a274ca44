use super::command::{CommandRunner, SystemCommandRunner};
use super::{ObjectStore, StoreError};
use crate::utils::bucket_url;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, error};

/// Default name of the Cloud SDK binary
pub const DEFAULT_GCLOUD: &str = "gcloud";

/// [`ObjectStore`] backed by the `gcloud storage` CLI
pub struct GcloudStorage<R = SystemCommandRunner> {
    program: String,
    runner: R,
}

impl GcloudStorage<SystemCommandRunner> {
    /// Use the `gcloud` found on `PATH`
    pub fn system() -> Self {
        Self::new(SystemCommandRunner)
    }
}

impl<R: CommandRunner> GcloudStorage<R> {
    pub fn new(runner: R) -> Self {
        Self {
            program: DEFAULT_GCLOUD.to_string(),
            runner,
        }
    }

    /// Override the binary that gets invoked (e.g. an absolute path)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run gcloud and return its stdout, or log the captured output and fail
    async fn invoke(&self, args: Vec<String>) -> Result<String, StoreError> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!(command = %command, "Invoking gcloud");

        let output = self.runner.run(&self.program, &args).await?;
        if output.success {
            return Ok(output.stdout);
        }

        let captured = output.combined();
        error!("{}", captured);
        Err(StoreError::CommandFailed {
            command,
            output: captured,
        })
    }
}

#[async_trait]
impl<R: CommandRunner> ObjectStore for GcloudStorage<R> {
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let stdout = self
            .invoke(vec!["storage".into(), "ls".into(), prefix.to_string()])
            .await?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn remove_all(&self, bucket: &str) -> Result<(), StoreError> {
        self.invoke(vec![
            "alpha".into(),
            "storage".into(),
            "rm".into(),
            "-r".into(),
            format!("{}/*", bucket_url(bucket)),
        ])
        .await?;
        Ok(())
    }

    async fn upload(&self, files: &[PathBuf], dest_url: &str) -> Result<(), StoreError> {
        if files.is_empty() {
            return Ok(());
        }

        let mut args = vec!["storage".to_string(), "cp".to_string()];
        args.extend(files.iter().map(|f| f.to_string_lossy().into_owned()));
        args.push(dest_url.to_string());

        self.invoke(args).await?;
        Ok(())
    }
}
