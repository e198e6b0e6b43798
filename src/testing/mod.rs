//! Test utilities
//!
//! Compiled for unit tests and, with the `testing` feature, for integration
//! tests in `tests/`.

pub mod requests;

pub use requests::RequestBuilder;
