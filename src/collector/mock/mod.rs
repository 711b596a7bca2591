//! Mock filesystem for testing.
//!
//! This module provides `MockFs` and pre-built `/proc` scenarios so that
//! `ProcfsSource` can be exercised without a Linux `/proc` filesystem.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
