//! Common test utilities for Encore contract and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory with helpers to run the CLI
//! - Fixtures: Reusable manifest and config content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
