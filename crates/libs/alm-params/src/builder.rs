//! Stateful accumulation of launcher parameters.

use crate::modes::{AlmRunMode, RunTestType, RunType};
use crate::task_config::TaskConfiguration;

/// Accumulates typed launcher parameters into a [`TaskConfiguration`].
///
/// The builder is a pure data transformation: setters store entries, nothing
/// is validated and nothing fails. Business validation belongs to the
/// launcher process that consumes the configuration. One builder is
/// constructed per task invocation.
#[derive(Debug, Default)]
pub struct ParameterBuilder {
    config: TaskConfiguration,
}

impl ParameterBuilder {
    /// Create a builder with an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the launcher execution mode.
    pub fn set_run_type(&mut self, run_type: RunType) {
        self.config.set("RunType", <&str>::from(run_type));
    }

    /// ALM server URL.
    pub fn set_alm_server_url(&mut self, url: impl Into<String>) {
        self.config.set("AlmServerUrl", url);
    }

    /// ALM user name.
    pub fn set_alm_user_name(&mut self, user_name: impl Into<String>) {
        self.config.set("AlmUserName", user_name);
    }

    /// ALM password. May be empty for integrated or cached credential flows.
    pub fn set_alm_password(&mut self, password: impl Into<String>) {
        self.config.set("AlmPassword", password);
    }

    /// ALM domain.
    pub fn set_alm_domain(&mut self, domain: impl Into<String>) {
        self.config.set("AlmDomain", domain);
    }

    /// ALM project.
    pub fn set_alm_project(&mut self, project: impl Into<String>) {
        self.config.set("AlmProject", project);
    }

    /// Build number reported back with the run.
    pub fn set_build_number(&mut self, build_number: impl Into<String>) {
        self.config.set("BuildNumber", build_number);
    }

    /// Test-suite execution strategy.
    ///
    /// Callers invoke this only for recognized selectors (see
    /// [`RunTestType::from_selector`]); otherwise the key stays absent.
    pub fn set_test_run_type(&mut self, run_test_type: RunTestType) {
        self.config.set("TestRunType", <&str>::from(run_test_type));
    }

    /// One indexed test-set entry, as `TestSet{index}`.
    ///
    /// Indices start at 1 and must be contiguous. The name is stored
    /// verbatim; backslash escaping is the caller's responsibility.
    pub fn set_test_set(&mut self, index: usize, escaped_name: impl Into<String>) {
        self.config.set(format!("TestSet{index}"), escaped_name);
    }

    /// The unindexed test-set key, used when the test-set input is empty.
    pub fn set_alm_test_set(&mut self, value: impl Into<String>) {
        self.config.set("AlmTestSet", value);
    }

    /// The CDA deployment step.
    ///
    /// Sets all three deployment keys as a unit, even when the values are
    /// empty. Skipping this call leaves all three keys absent; there is no
    /// partial form.
    pub fn set_deployment_step(
        &mut self,
        action: impl Into<String>,
        environment_name: impl Into<String>,
        deprovisioning_action: impl Into<String>,
    ) {
        self.config.set("DeploymentAction", action);
        self.config.set("DeployedEnvironmentName", environment_name);
        self.config.set("DeprovisioningAction", deprovisioning_action);
    }

    /// Timeslot duration granted to the run.
    pub fn set_alm_timeout(&mut self, timeout: impl Into<String>) {
        self.config.set("AlmTimeout", timeout);
    }

    /// Where the launcher executes the run.
    pub fn set_alm_run_mode(&mut self, run_mode: AlmRunMode) {
        self.config.set("AlmRunMode", <&str>::from(run_mode));
    }

    /// Host the run executes on.
    pub fn set_alm_run_host(&mut self, host: impl Into<String>) {
        self.config.set("AlmRunHost", host);
    }

    /// The accumulated configuration. Pure read; reflects all setters so far.
    pub fn properties(&self) -> &TaskConfiguration {
        &self.config
    }

    /// Consume the builder, yielding the accumulated configuration.
    pub fn into_properties(self) -> TaskConfiguration {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_unconditional_keys() {
        let mut builder = ParameterBuilder::new();
        builder.set_run_type(RunType::AlmLabManagement);
        builder.set_alm_server_url("http://alm:8080/qcbin");
        builder.set_alm_user_name("tester");
        builder.set_alm_password("");
        builder.set_alm_domain("DEFAULT");
        builder.set_alm_project("Payments");
        builder.set_build_number("42");

        let config = builder.properties();
        assert_eq!(config.get("RunType"), Some("AlmLabManagement"));
        assert_eq!(config.get("AlmServerUrl"), Some("http://alm:8080/qcbin"));
        assert_eq!(config.get("AlmPassword"), Some(""));
        assert_eq!(config.get("BuildNumber"), Some("42"));
    }

    #[test]
    fn indexed_test_sets() {
        let mut builder = ParameterBuilder::new();
        builder.set_test_set(1, "Regression");
        builder.set_test_set(2, "Smoke");

        let config = builder.properties();
        assert_eq!(config.get("TestSet1"), Some("Regression"));
        assert_eq!(config.get("TestSet2"), Some("Smoke"));
        assert!(!config.contains_key("AlmTestSet"));
    }

    #[test]
    fn deployment_step_sets_all_three_keys() {
        let mut builder = ParameterBuilder::new();
        builder.set_deployment_step("", "Prod", "");

        let config = builder.properties();
        assert_eq!(config.get("DeploymentAction"), Some(""));
        assert_eq!(config.get("DeployedEnvironmentName"), Some("Prod"));
        assert_eq!(config.get("DeprovisioningAction"), Some(""));
    }

    #[test]
    fn mandatory_constants() {
        let mut builder = ParameterBuilder::new();
        builder.set_alm_timeout("30");
        builder.set_alm_run_mode(AlmRunMode::RunLocal);
        builder.set_alm_run_host("localhost");

        let config = builder.properties();
        assert_eq!(config.get("AlmTimeout"), Some("30"));
        assert_eq!(config.get("AlmRunMode"), Some("RUN_LOCAL"));
        assert_eq!(config.get("AlmRunHost"), Some("localhost"));
    }

    #[test]
    fn properties_reflects_later_setters() {
        let mut builder = ParameterBuilder::new();
        builder.set_build_number("1");
        assert_eq!(builder.properties().get("BuildNumber"), Some("1"));

        builder.set_build_number("2");
        assert_eq!(builder.properties().get("BuildNumber"), Some("2"));
        assert_eq!(builder.properties().len(), 1);
    }
}
