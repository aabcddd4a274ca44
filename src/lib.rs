pub mod config;
pub mod generate;
pub mod layout;
pub mod reconciliation;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::{
    check_config_consistency, parse_config, read_config, ConfigError, Consistency, FolderSpec,
    LayoutConfig,
};
pub use generate::{generate_folder, generate_layout, parse_file_size, GenerateError, GenerationReport};
pub use layout::{FolderGroup, LayoutError, LayoutSpec};
pub use reconciliation::{
    compare_folder_structure, execute_reconciliation, reconcile_config, reset_bucket, structure_exists,
    ExecuteError, ReconciliationResult, ResetStatus, RunOptions,
};
pub use store::{CommandOutput, CommandRunner, GcloudStorage, ObjectStore, StoreError};
