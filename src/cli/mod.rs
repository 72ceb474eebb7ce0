//! Command-line interface

pub mod commands;
pub mod prompt;
pub mod setup;
