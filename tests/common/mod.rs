#![allow(dead_code)]

use async_trait::async_trait;
use gcs_layout::store::{CommandOutput, CommandRunner};
use gcs_layout::{parse_config, LayoutSpec, ObjectStore, StoreError};
use std::collections::{HashMap, VecDeque};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// In-memory store answering listings from a fixed prefix -> entries table.
///
/// Prefixes without an entry fail, like `gcloud storage ls` on a missing path.
#[derive(Default)]
pub struct FakeStore {
    listings: HashMap<String, Vec<String>>,
    fail_remove: bool,
    pub list_calls: Mutex<Vec<String>>,
    pub remove_calls: Mutex<Vec<String>>,
    pub uploads: Mutex<Vec<(Vec<PathBuf>, String)>>,
    /// Sizes of the uploaded files, read while they still exist on disk
    pub uploaded_sizes: Mutex<Vec<u64>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, prefix: &str, entries: &[&str]) -> Self {
        self.listings.insert(
            prefix.to_string(),
            entries.iter().map(|e| e.to_string()).collect(),
        );
        self
    }

    pub fn failing_remove(mut self) -> Self {
        self.fail_remove = true;
        self
    }

    pub fn listed(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn upload_destinations(&self) -> Vec<String> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|(_, dest)| dest.clone())
            .collect()
    }
}

#[async_trait]
impl ObjectStore for FakeStore {
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        self.list_calls.lock().unwrap().push(prefix.to_string());
        self.listings
            .get(prefix)
            .cloned()
            .ok_or_else(|| StoreError::CommandFailed {
                command: format!("gcloud storage ls {}", prefix),
                output: "Error while listing".to_string(),
            })
    }

    async fn remove_all(&self, bucket: &str) -> Result<(), StoreError> {
        self.remove_calls.lock().unwrap().push(bucket.to_string());
        if self.fail_remove {
            return Err(StoreError::CommandFailed {
                command: format!("gcloud alpha storage rm -r gs://{}/*", bucket),
                output: "Error while deleting".to_string(),
            });
        }
        Ok(())
    }

    async fn upload(&self, files: &[PathBuf], dest_url: &str) -> Result<(), StoreError> {
        for file in files {
            let size = std::fs::metadata(file)?.len();
            self.uploaded_sizes.lock().unwrap().push(size);
        }
        self.uploads
            .lock()
            .unwrap()
            .push((files.to_vec(), dest_url.to_string()));
        Ok(())
    }
}

/// Command runner that replays scripted outputs and records every argv
#[derive(Default)]
pub struct FakeRunner {
    outputs: Mutex<VecDeque<CommandOutput>>,
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeRunner {
    pub fn new(outputs: Vec<CommandOutput>) -> Self {
        Self {
            outputs: Mutex::new(outputs.into()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        Ok(self.outputs.lock().unwrap().pop_front().unwrap_or(CommandOutput {
            success: true,
            ..Default::default()
        }))
    }
}

pub fn success(stdout: &str) -> CommandOutput {
    CommandOutput {
        success: true,
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn failure(stderr: &str) -> CommandOutput {
    CommandOutput {
        success: false,
        code: Some(1),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

/// Log sink shared between a test and the subscriber it installs
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Route this thread's tracing output into the buffer until the guard drops
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Flat folder `test_folder` and nested `nested/test_folder`, one file each
pub const FULL_LAYOUT: &str = r#"{
    "name": "test_bucket",
    "folders": {
        "num_folders": 1,
        "folder_structure": [
            {"name": "test_folder", "num_files": 1, "file_name_prefix": "file", "file_size": "1kb"}
        ]
    },
    "nested_folders": {
        "folder_name": "nested",
        "num_folders": 1,
        "folder_structure": [
            {"name": "test_folder", "num_files": 1, "file_name_prefix": "file", "file_size": "1kb"}
        ]
    }
}"#;

/// Only the flat folder of [`FULL_LAYOUT`]
pub const FLAT_LAYOUT: &str = r#"{
    "name": "test_bucket",
    "folders": {
        "num_folders": 1,
        "folder_structure": [
            {"name": "test_folder", "num_files": 1, "file_name_prefix": "file", "file_size": "1kb"}
        ]
    }
}"#;

pub fn layout(json: &str) -> LayoutSpec {
    let config = parse_config(json).expect("Should parse layout");
    LayoutSpec::from_config(&config).expect("Layout should be consistent")
}
