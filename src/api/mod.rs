//! Project dataset client and types.
//!
//! This module provides the interface for fetching the remote project list.

mod client;
pub mod error;
pub mod types;

pub use client::{ProjectClient, ProjectSource, DEFAULT_DATA_URL};
pub use error::ApiError;
pub use types::Project;
