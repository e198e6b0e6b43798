//! Validation Module
//!
//! Stateless validators for the authorization-code callback flow:
//!
//! - [`callback`] - Callback code/state verification (CSRF defense)
//! - [`email`] - Organization email pattern and denylist checks
//!
//! Each validator is a single evaluation with early-exit branches: it
//! returns either the extracted data or a ready-to-send error response. No
//! state is shared between calls.

pub mod callback;
pub mod email;

// Re-export commonly used items for convenience
pub use callback::CallbackValidator;
pub use email::EmailValidator;
