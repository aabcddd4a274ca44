mod compare;
mod execute;
mod exists;
mod reset;

pub use compare::compare_folder_structure;
pub use execute::{
    execute_reconciliation, reconcile_config, ExecuteError, ReconciliationResult, RunOptions,
};
pub use exists::structure_exists;
pub use reset::{reset_bucket, ResetStatus};
