//! End-to-end split tests
//!
//! - Scenario tests for the dependency rules
//! - Properties every successful run must satisfy
//! - Filesystem layout and error reporting

pub mod tests_layout;
pub mod tests_properties;
pub mod tests_scenarios;
