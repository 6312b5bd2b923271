//! Véridion AI - Quality Orchestrator.
//!
//! Startup entry point: loads the environment file and prints the product banner.

pub mod config;
pub mod core;
pub mod utils;

pub use config::EnvFile;
pub use core::banner::{Banner, DocLink, VERIDION_BANNER};
pub use core::startup::run;
pub use utils::error::{Result, VeridionError};
