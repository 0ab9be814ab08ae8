//! CLI command integration tests
//!
//! Each module drives the compiled binary for one subcommand and checks
//! its text, toon and json output.

pub mod directory_tests;
pub mod query_tests;
pub mod roster_tests;
pub mod show_tests;
