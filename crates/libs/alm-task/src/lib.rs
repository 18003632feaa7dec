//! Task definitions that interface with the ALM test-execution launcher.
//!
//! A [`LauncherTask`] turns a typed, validated task input into the
//! [`TaskConfiguration`] the external launcher consumes, and owns the
//! report/return-code filename policy for its runs.
//!
//! # Usage
//!
//! ```rust
//! use alm_task::{AlmLabManagementTask, LauncherTask};
//!
//! let task = LauncherTask::AlmLabManagement(AlmLabManagementTask {
//!     server_url: String::from("http://alm.example.com/qcbin"),
//!     user_name: String::from("tester"),
//!     domain: String::from("DEFAULT"),
//!     project: String::from("Payments"),
//!     run_type_selector: String::from("testSet"),
//!     test_sets: String::from("Root\\Regression"),
//!     timeslot_duration: String::from("30"),
//!     ..AlmLabManagementTask::default()
//! });
//!
//! let config = task.task_properties()?;
//! assert_eq!(config.get("TestSet1"), Some("Root\\\\Regression"));
//! # Ok::<(), alm_task::error::Error>(())
//! ```

use alm_params::TaskConfiguration;

use crate::prelude::*;

pub mod error;
pub mod lab_management;
pub mod prelude;

pub use lab_management::{AlmLabManagementTask, DeploymentStep};

/// Fixed name of the file the launcher writes its exit code to.
///
/// A constant by design: the surrounding pipeline polls for this exact name,
/// so it must never be derived from task input.
pub const RET_CODE_FILE_NAME: &str = "TestRunReturnCode.txt";

/// One launcher task kind, with its configuration and filename policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherTask {
    /// A test run through ALM Lab Management timeslots.
    AlmLabManagement(AlmLabManagementTask),
}

impl LauncherTask {
    /// Validate the task input and render the launcher configuration.
    pub fn task_properties(&self) -> Result<TaskConfiguration> {
        match self {
            LauncherTask::AlmLabManagement(task) => task.task_properties(),
        }
    }

    /// Resolve the report filename.
    ///
    /// A non-empty caller-supplied report name wins; otherwise the
    /// surrounding system's base naming policy `base` supplies the name.
    pub fn report_filename(&self, base: impl FnOnce() -> String) -> String {
        match self {
            LauncherTask::AlmLabManagement(task) => task.report_filename(base),
        }
    }

    /// The return-code filename, identical for every task kind and input.
    pub fn ret_code_filename(&self) -> &'static str {
        RET_CODE_FILE_NAME
    }
}
