//! Parser tests against realistic generated declaration files.

pub mod tests_generated_client;
