/*
[INPUT]:  Authentication configuration and credentials
[OUTPUT]: Authenticators that decorate outgoing requests
[POS]:    Auth layer - handles IBM Cloud API authentication
[UPDATE]: When auth types or environment keys change
*/

pub mod authenticator;
pub mod environment;

pub use authenticator::{
    Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
};
pub use environment::{ExternalConfig, authenticator_from_environment};
