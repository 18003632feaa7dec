//! Enumerated launcher tags and their wire names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Launcher execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunType {
    /// Run test sets stored on an ALM server.
    Alm,
    /// Run tests from the local file system.
    FileSystem,
    /// Run through ALM Lab Management timeslots.
    AlmLabManagement,
}

impl From<RunType> for &'static str {
    fn from(value: RunType) -> Self {
        match value {
            RunType::Alm => "Alm",
            RunType::FileSystem => "FileSystem",
            RunType::AlmLabManagement => "AlmLabManagement",
        }
    }
}

/// Test-suite execution strategy for Lab Management runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunTestType {
    /// Run a functional test suite.
    TestSuite,
    /// Run a build verification suite (BVS).
    BuildVerificationSuite,
}

impl RunTestType {
    /// Map the raw run-type selector to a strategy.
    ///
    /// Only the literals `"testSet"` and `"buildVerificationSuite"` are
    /// recognized. Any other selector, including the empty string, yields
    /// `None` and the caller emits no `TestRunType` key at all. The launcher
    /// owns the interpretation of the absent key.
    pub fn from_selector(value: &str) -> Option<Self> {
        match value {
            "testSet" => Some(RunTestType::TestSuite),
            "buildVerificationSuite" => Some(RunTestType::BuildVerificationSuite),
            _ => None,
        }
    }
}

impl From<RunTestType> for &'static str {
    fn from(value: RunTestType) -> Self {
        match value {
            RunTestType::TestSuite => "TEST_SUITE",
            RunTestType::BuildVerificationSuite => "BUILD_VERIFICATION_SUITE",
        }
    }
}

/// Where the launcher executes the run.
///
/// This workflow always runs locally on the launcher host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlmRunMode {
    /// Execute on the launcher host itself.
    RunLocal,
}

impl From<AlmRunMode> for &'static str {
    fn from(value: AlmRunMode) -> Self {
        match value {
            AlmRunMode::RunLocal => "RUN_LOCAL",
        }
    }
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(<&str>::from(*self))
    }
}

impl fmt::Display for RunTestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(<&str>::from(*self))
    }
}

impl fmt::Display for AlmRunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(<&str>::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_selectors() {
        assert_eq!(
            RunTestType::from_selector("testSet"),
            Some(RunTestType::TestSuite)
        );
        assert_eq!(
            RunTestType::from_selector("buildVerificationSuite"),
            Some(RunTestType::BuildVerificationSuite)
        );
    }

    #[test]
    fn unrecognized_selectors_yield_none() {
        assert_eq!(RunTestType::from_selector(""), None);
        assert_eq!(RunTestType::from_selector("TestSet"), None);
        assert_eq!(RunTestType::from_selector("bvs"), None);
    }

    #[test]
    fn wire_names() {
        assert_eq!(RunType::AlmLabManagement.to_string(), "AlmLabManagement");
        assert_eq!(RunTestType::TestSuite.to_string(), "TEST_SUITE");
        assert_eq!(
            RunTestType::BuildVerificationSuite.to_string(),
            "BUILD_VERIFICATION_SUITE"
        );
        assert_eq!(AlmRunMode::RunLocal.to_string(), "RUN_LOCAL");
    }
}
