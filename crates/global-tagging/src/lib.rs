/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Global Tagging client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Client for the IBM Cloud Global Tagging API.
//!
//! ```no_run
//! use std::sync::Arc;
//! use global_tagging::{
//!     BearerTokenAuthenticator, GlobalTaggingClient, ListTagsOptions, ServiceOptions,
//! };
//!
//! # async fn run() -> global_tagging::Result<()> {
//! let auth = BearerTokenAuthenticator::new("<iam access token>")?;
//! let client = GlobalTaggingClient::with_options(
//!     ServiceOptions::new().authenticator(Arc::new(auth)),
//! )?;
//! let tags = client.list_tags(&ListTagsOptions::new().limit(10)).await?;
//! for tag in tags.result.items {
//!     println!("{}", tag.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    Authenticator,
    BasicAuthenticator,
    BearerTokenAuthenticator,
    ExternalConfig,
    NoAuthAuthenticator,
    authenticator_from_environment,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DEFAULT_SERVICE_NAME,
    DEFAULT_SERVICE_URL,
    GlobalTaggingClient,
    GlobalTaggingError,
    Result,
    ServiceOptions,
};

// Re-export all types
pub use types::*;
