//! Launcher parameter building for ALM test-run tasks.
//!
//! Translates the typed invocation parameters of an ALM (Application
//! Lifecycle Management) test run into the ordered, string-keyed
//! configuration mapping consumed by the external test-execution launcher.
//!
//! # Usage
//!
//! ```rust
//! use alm_params::{AlmRunMode, ParameterBuilder, RunType};
//!
//! let mut builder = ParameterBuilder::new();
//! builder.set_run_type(RunType::AlmLabManagement);
//! builder.set_alm_server_url("http://alm.example.com/qcbin");
//! builder.set_alm_run_mode(AlmRunMode::RunLocal);
//! builder.set_alm_run_host("localhost");
//!
//! let config = builder.properties();
//! assert_eq!(config.get("RunType"), Some("AlmLabManagement"));
//! ```

pub mod builder;
pub mod modes;
pub mod task_config;

pub use builder::ParameterBuilder;
pub use modes::{AlmRunMode, RunTestType, RunType};
pub use task_config::TaskConfiguration;
