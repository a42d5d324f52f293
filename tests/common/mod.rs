//! Common test utilities for concept-engine CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working and config directories plus a CLI runner
//! - Fixtures: small tree and fragment assets

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
