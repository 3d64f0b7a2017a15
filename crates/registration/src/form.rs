//! Registration form state and validation.

use crate::error::ValidationError;
use registry_client::{Bootcamp, NewParticipant};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

const FULL_NAME_LEN: RangeInclusive<usize> = 5..=30;
const DISCORD_USER_LEN: RangeInclusive<usize> = 2..=30;
const EMAIL_MAX_LEN: usize = 50;
const MOTIVATION_LEN: RangeInclusive<usize> = 5..=100;

/// Transient form state for one registration session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    full_name: String,
    discord_user: String,
    email: String,
    motivation: String,
    bootcamps: BTreeSet<Bootcamp>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn discord_user(&self) -> &str {
        &self.discord_user
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn motivation(&self) -> &str {
        &self.motivation
    }

    pub fn bootcamps(&self) -> &BTreeSet<Bootcamp> {
        &self.bootcamps
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
    }

    pub fn set_discord_user(&mut self, value: impl Into<String>) {
        self.discord_user = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_motivation(&mut self, value: impl Into<String>) {
        self.motivation = value.into();
    }

    /// Toggle a bootcamp selection. Selecting twice deselects.
    pub fn toggle_bootcamp(&mut self, bootcamp: Bootcamp) {
        if !self.bootcamps.remove(&bootcamp) {
            self.bootcamps.insert(bootcamp);
        }
    }

    /// Numeric identifiers for the write path, in stable order.
    pub fn bootcamp_ids(&self) -> Vec<u8> {
        self.bootcamps.iter().map(|b| b.id()).collect()
    }

    /// Display labels for the stored receipt.
    pub fn bootcamp_labels(&self) -> Vec<String> {
        self.bootcamps.iter().map(|b| b.label().to_string()).collect()
    }

    /// Check the form rules in order; the first failing rule wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::FullNameRequired);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if self.motivation.trim().is_empty() {
            return Err(ValidationError::MotivationRequired);
        }
        if self.bootcamps.is_empty() {
            return Err(ValidationError::NoBootcampSelected);
        }

        if !FULL_NAME_LEN.contains(&self.full_name.trim().chars().count()) {
            return Err(ValidationError::FullNameLength);
        }
        if !DISCORD_USER_LEN.contains(&self.discord_user.trim().chars().count()) {
            return Err(ValidationError::DiscordUserLength);
        }

        let email = self.email.trim();
        if email.chars().count() > EMAIL_MAX_LEN {
            return Err(ValidationError::EmailTooLong);
        }
        if !is_well_formed_email(email) {
            return Err(ValidationError::EmailSyntax);
        }

        if !MOTIVATION_LEN.contains(&self.motivation.trim().chars().count()) {
            return Err(ValidationError::MotivationLength);
        }

        Ok(())
    }

    /// Build the write-path request from the current snapshot.
    pub fn to_request(&self) -> NewParticipant {
        NewParticipant {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            discord_user: self.discord_user.trim().to_string(),
            bootcamp_ids: self.bootcamp_ids(),
            motivation: self.motivation.trim().to_string(),
        }
    }
}

fn is_well_formed_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
