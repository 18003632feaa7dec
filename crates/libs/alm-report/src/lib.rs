//! Result aggregation models for ALM launcher test runs.
//!
//! Passive records populated by the aggregator that parses launcher output.
//! No parsing or validation happens here; field formats are owned by the
//! external report source.

pub mod report;
pub mod test_run;

pub use report::ReportMetaData;
pub use test_run::TestRun;
