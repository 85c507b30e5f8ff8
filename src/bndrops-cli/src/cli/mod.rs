//! CLI argument definitions for bndrops

mod core;

pub use core::{Cli, Commands};
