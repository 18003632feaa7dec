//! Per-execution result record.

use serde::{Deserialize, Serialize};

/// Result of one test execution inside a parallel batch.
///
/// A passive record filled in by the external aggregator; formats of all
/// fields are owned by the launcher's report output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRun {
    /// Test name as reported by the launcher.
    pub name: String,
    /// Execution status.
    pub status: String,
    /// Execution duration.
    pub duration: String,
    /// Error message for failed executions. Empty on success.
    #[serde(default)]
    pub error_message: String,
}
