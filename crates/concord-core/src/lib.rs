//! Concord core crate - shared types, errors, and configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::ConcordConfig;
pub use error::{ConcordError, Result};
pub use types::*;
