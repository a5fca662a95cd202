//! Shared fixtures and workspace helpers for integration tests.

pub mod source_fixtures;
pub mod split_helpers;
