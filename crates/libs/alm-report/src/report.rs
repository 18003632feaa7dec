//! Per-run report metadata.

use serde::{Deserialize, Serialize};

use crate::test_run::TestRun;

/// Reportable outcome of one run or one parallel batch.
///
/// Fields are set once by the aggregator that parses launcher output; all of
/// them are free-form strings whose format the external report source owns.
/// `error_message` and `test_runs` default at construction so read sites
/// never deal with missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetaData {
    /// Path of the report folder (HTML report format only).
    pub report_path: String,
    /// Display name for the run.
    pub display_name: String,
    /// URL of the report resource.
    pub resource_url: String,
    /// When the run happened.
    pub date_time: String,
    /// Run status as reported by the launcher.
    pub status: String,
    /// Run duration as reported by the launcher.
    pub duration: String,
    /// Error message for failed runs. Empty when the run succeeded.
    #[serde(default)]
    pub error_message: String,
    /// Per-execution results, appended in completion order by the parallel
    /// runner aggregator.
    #[serde(default)]
    pub test_runs: Vec<TestRun>,
}

impl ReportMetaData {
    /// Create a report with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one per-execution result. Append-only; arrival order is kept.
    pub fn push_test_run(&mut self, run: TestRun) {
        self.test_runs.push(run);
    }
}
