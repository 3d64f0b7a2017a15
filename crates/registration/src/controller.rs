//! Registration submission controller.

use crate::error::SubmitError;
use crate::form::RegistrationForm;
use crate::navigator::Navigator;
use registry_client::{Bootcamp, RegistryClient};
use submission_store::{FlagStore, StoreError, SubmissionReceipt};
use tracing::{info, instrument, warn};

/// Lifecycle of one form session.
///
/// `Validating` and `Submitting` are passed through inside a submit attempt;
/// a session comes to rest in `Editing`, `Failed` or `Succeeded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Owns one registration form session: collects field edits, validates,
/// performs exactly one network call per valid submit attempt, and writes
/// the submission flag on success.
///
/// The flag is the sole gate against a second successful submission from
/// this client. It is a client-side guarantee only; deleting the store
/// resets it.
pub struct RegistrationController {
    client: RegistryClient,
    store: Box<dyn FlagStore>,
    navigator: Box<dyn Navigator>,
    form: RegistrationForm,
    phase: Phase,
    registered_at_open: bool,
}

impl RegistrationController {
    /// Start a form session. Reads the flag once; if present, the session
    /// starts permanently disabled.
    pub async fn open(
        client: RegistryClient,
        store: Box<dyn FlagStore>,
        navigator: Box<dyn Navigator>,
    ) -> Result<Self, StoreError> {
        let registered_at_open = store.load().await?.is_some();

        Ok(Self {
            client,
            store,
            navigator,
            form: RegistrationForm::new(),
            phase: Phase::Editing,
            registered_at_open,
        })
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether this client already holds a submission flag, from a previous
    /// session or from a success in this one.
    pub fn already_registered(&self) -> bool {
        self.registered_at_open || self.phase == Phase::Succeeded
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.already_registered() && !matches!(self.phase, Phase::Submitting)
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.form.set_full_name(value);
        self.edited();
    }

    pub fn set_discord_user(&mut self, value: impl Into<String>) {
        self.form.set_discord_user(value);
        self.edited();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.set_email(value);
        self.edited();
    }

    pub fn set_motivation(&mut self, value: impl Into<String>) {
        self.form.set_motivation(value);
        self.edited();
    }

    pub fn toggle_bootcamp(&mut self, bootcamp: Bootcamp) {
        self.form.toggle_bootcamp(bootcamp);
        self.edited();
    }

    // Field edits keep (or re-enter) Editing; a finished session stays put.
    fn edited(&mut self) {
        if self.phase != Phase::Succeeded {
            self.phase = Phase::Editing;
        }
    }

    /// Submit the current snapshot.
    ///
    /// No request is issued unless validation passes. On success the flag is
    /// written and a screen transition is requested; on failure every field
    /// value is preserved and nothing is written.
    #[instrument(skip(self), fields(full_name = %self.form.full_name()))]
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if self.already_registered() {
            return Err(SubmitError::AlreadyRegistered);
        }

        self.phase = Phase::Validating;
        if let Err(rule) = self.form.validate() {
            self.phase = Phase::Editing;
            return Err(rule.into());
        }

        self.phase = Phase::Submitting;
        let request = self.form.to_request();

        match self.client.submit(&request).await {
            Ok(()) => {
                let receipt = SubmissionReceipt::new(
                    request.full_name,
                    request.discord_user,
                    request.email,
                    request.motivation,
                    self.form.bootcamp_labels(),
                );
                self.store.save(&receipt).await?;
                self.phase = Phase::Succeeded;
                info!("Registration submitted for {}", receipt.full_name);
                self.navigator.on_registered();
                Ok(())
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                self.phase = Phase::Failed;
                Err(e.into())
            }
        }
    }
}
