//! Shared utilities
//!
//! - [`cookie`] - State cookie name and extraction helper
//! - [`responses`] - Fixed plaintext error responses

pub mod cookie;
pub mod responses;

pub use cookie::{state_cookie_value, STATE_COOKIE};
pub use responses::ResponseBuilder;
