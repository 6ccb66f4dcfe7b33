/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for global-tagging tests

use std::sync::Arc;

use global_tagging::{Authenticator, GlobalTaggingClient, NoAuthAuthenticator, ServiceOptions};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer, authenticator: Arc<dyn Authenticator>) -> GlobalTaggingClient {
    GlobalTaggingClient::with_options(
        ServiceOptions::new()
            .service_url(server.uri())
            .authenticator(authenticator),
    )
    .expect("client init")
}

/// Unauthenticated client pointed at the mock server
#[allow(dead_code)]
pub fn noauth_client(server: &MockServer) -> GlobalTaggingClient {
    client_for(server, Arc::new(NoAuthAuthenticator::new()))
}

/// Mock bearer token for testing
#[allow(dead_code)]
pub fn mock_bearer_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}
