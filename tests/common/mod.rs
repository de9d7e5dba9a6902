//! Common test utilities for profilecard contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Test doubles for the editor's host ports
//! - Fixtures: Reusable profile content constants

#![allow(dead_code)]

pub mod doubles;
pub mod env;
pub mod fixtures;

pub use doubles::*;
pub use env::*;
pub use fixtures::*;
