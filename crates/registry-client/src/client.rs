//! Participant Registry HTTP client.

use crate::error::RegistryError;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default registry deployment.
pub const DEFAULT_BASE_URL: &str =
    "https://bitup-brgnh7fyergeata9.spaincentral-01.azurewebsites.net";

const API_PATH: &str = "/api/ParticipantAPI";

/// Participant Registry REST client.
#[derive(Clone)]
pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a new registry client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RegistryError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Submit a new registration.
    ///
    /// Any 2xx response counts as success; every other outcome is reported
    /// uniformly as an API error.
    #[instrument(skip(self, participant), fields(full_name = %participant.full_name))]
    pub async fn submit(&self, participant: &NewParticipant) -> Result<(), RegistryError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, API_PATH))
            .json(participant)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            warn!("Registration rejected: {}", msg);
            return Err(RegistryError::Api(msg));
        }

        debug!("Registration accepted");
        Ok(())
    }

    /// Fetch all stored registrations.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Participant>, RegistryError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, API_PATH))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(RegistryError::Api(msg));
        }

        let participants: Vec<Participant> = response.json().await?;
        debug!("Fetched {} participants", participants.len());
        Ok(participants)
    }
}
