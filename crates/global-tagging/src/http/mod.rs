/*
[INPUT]:  Service options and operation parameters
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod tags;

pub use error::{GlobalTaggingError, Result};

pub use client::{
    ClientConfig, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL, GlobalTaggingClient, ServiceOptions,
};
