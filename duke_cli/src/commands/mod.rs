//! CLI subcommand implementations.

pub mod measures;
pub mod query;
pub mod states;
pub mod years;
