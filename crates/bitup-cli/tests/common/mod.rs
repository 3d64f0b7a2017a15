//! Common test utilities for integration tests.

use registry_client::RegistryClient;
use std::time::Duration;
use wiremock::MockServer;

/// Start a mock Participant Registry server.
pub async fn mock_registry_server() -> MockServer {
    MockServer::start().await
}

/// Create a registry client configured for a mock server.
pub fn test_registry_client(mock_server: &MockServer) -> RegistryClient {
    RegistryClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap()
}
