//! Shared test utilities for jobtrack integration tests.
//!
//! This module provides:
//! - `TestHarness` for stores backed by a temporary data directory
//! - Builders for creating jobs and drafts programmatically

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;
