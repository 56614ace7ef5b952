//! A minimal HTTP client that performs one GET request per invocation.
//!
//! See the `url` module for target parsing.
//! See the `protocol` module for the request wire format.
//! See the `client` module for connecting and draining the response.

pub mod client;
pub mod error;
pub mod protocol;
pub mod url;
