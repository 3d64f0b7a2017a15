//! Registration form, validation and submission controller.
//!
//! The controller performs exactly one network call per valid submit
//! attempt and at most one successful submission per client, gated by the
//! injected [`submission_store::FlagStore`].

mod controller;
mod error;
mod form;
mod navigator;

pub use controller::{Phase, RegistrationController};
pub use error::{SubmitError, ValidationError};
pub use form::RegistrationForm;
pub use navigator::{Navigator, NoopNavigator};
pub use registry_client::Bootcamp;
