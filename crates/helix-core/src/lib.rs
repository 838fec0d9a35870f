//! Shared configuration and error types for the Helix webchat relay.

pub mod config;
pub mod error;

pub use config::HelixConfig;
pub use error::{HelixError, Result};
