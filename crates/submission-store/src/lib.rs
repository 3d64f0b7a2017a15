//! Durable storage for the one-shot submission flag.
//!
//! The flag marks "this client has already registered". It is written once,
//! on a successful submission, read at every form-session start, and never
//! cleared by the application itself.

mod error;
mod store;
mod types;

pub use error::StoreError;
pub use store::{FileFlagStore, FlagStore, MemoryFlagStore};
pub use types::SubmissionReceipt;
