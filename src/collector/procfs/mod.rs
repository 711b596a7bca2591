//! `/proc` filesystem parsing and the `/proc`-backed metric source.

pub mod parser;
mod system;

pub use system::ProcfsSource;
