//! The ALM Lab Management task kind.

use alm_params::{AlmRunMode, ParameterBuilder, RunTestType, RunType, TaskConfiguration};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prelude::*;

/// A CDA deployment step bound to a test run.
///
/// Present as a unit or not at all; individual values may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStep {
    /// Deployment action.
    pub action: String,
    /// Name of the deployed environment.
    pub environment_name: String,
    /// Deprovisioning action.
    pub deprovisioning_action: String,
}

/// Typed input for a Lab Management test run.
///
/// `server_url`, `user_name`, `domain`, `project` and `timeslot_duration`
/// are required and checked by [`validate`](Self::validate); the remaining
/// fields may stay empty or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmLabManagementTask {
    /// ALM server URL.
    pub server_url: String,
    /// ALM user name.
    pub user_name: String,
    /// ALM password. Empty for integrated or cached credential flows.
    #[serde(default)]
    pub password: String,
    /// ALM domain.
    pub domain: String,
    /// ALM project.
    pub project: String,
    /// Raw run-type selector (`"testSet"` or `"buildVerificationSuite"`).
    /// Unrecognized selectors emit no `TestRunType` key.
    #[serde(default)]
    pub run_type_selector: String,
    /// Newline-delimited test-set names, one per line. No trimming applies.
    #[serde(default)]
    pub test_sets: String,
    /// Timeslot duration granted to the run.
    pub timeslot_duration: String,
    /// Report name override. Empty defers to the base naming policy.
    #[serde(default)]
    pub report_name: String,
    /// CDA deployment step, when the run opts into deployment.
    #[serde(default)]
    pub deployment: Option<DeploymentStep>,
    /// Build number reported back with the run.
    #[serde(default)]
    pub build_number: String,
}

impl AlmLabManagementTask {
    /// Check that every required field is non-empty.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("server_url", &self.server_url),
            ("user_name", &self.user_name),
            ("domain", &self.domain),
            ("project", &self.project),
            ("timeslot_duration", &self.timeslot_duration),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(Error::MissingParameter(name));
            }
        }
        Ok(())
    }

    /// Validate the input and render the launcher configuration.
    pub fn task_properties(&self) -> Result<TaskConfiguration> {
        self.validate()?;

        let mut builder = ParameterBuilder::new();
        builder.set_run_type(RunType::AlmLabManagement);
        builder.set_alm_server_url(self.server_url.as_str());
        builder.set_alm_user_name(self.user_name.as_str());
        builder.set_alm_password(self.password.as_str());
        builder.set_alm_domain(self.domain.as_str());
        builder.set_alm_project(self.project.as_str());
        builder.set_build_number(self.build_number.as_str());

        if let Some(run_test_type) = RunTestType::from_selector(&self.run_type_selector) {
            builder.set_test_run_type(run_test_type);
        }

        if self.test_sets.is_empty() {
            builder.set_alm_test_set("");
        } else {
            for (i, test_set) in self.test_sets.split('\n').enumerate() {
                builder.set_test_set(i + 1, escape_backslashes(test_set));
            }
        }

        if let Some(step) = &self.deployment {
            builder.set_deployment_step(
                step.action.as_str(),
                step.environment_name.as_str(),
                step.deprovisioning_action.as_str(),
            );
        }

        // ALM mandatory parameters.
        builder.set_alm_timeout(self.timeslot_duration.as_str());
        builder.set_alm_run_mode(AlmRunMode::RunLocal);
        builder.set_alm_run_host("localhost");

        let config = builder.into_properties();
        debug!(
            project = %self.project,
            entries = config.len(),
            "assembled launcher configuration"
        );
        Ok(config)
    }

    /// Resolve the report filename against the base naming policy.
    pub fn report_filename(&self, base: impl FnOnce() -> String) -> String {
        if self.report_name.is_empty() {
            base()
        } else {
            self.report_name.clone()
        }
    }
}

/// Double every literal backslash so test-set paths survive the launcher's
/// property parsing.
fn escape_backslashes(name: &str) -> String {
    name.replace('\\', "\\\\")
}
