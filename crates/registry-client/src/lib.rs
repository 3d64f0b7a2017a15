//! Participant Registry REST API client.

mod client;
mod error;
mod types;

pub use client::{RegistryClient, DEFAULT_BASE_URL};
pub use error::RegistryError;
pub use types::*;
