//! Bootstrap CLI library — exposes modules for integration testing.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod bootstrap;
pub mod cli;
pub mod command_runner;
pub mod config;
pub mod error;
pub mod output;
