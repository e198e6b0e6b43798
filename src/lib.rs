#![warn(clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the aadgate library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod models;
pub mod settings;
pub mod utils;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use models::{CallbackParams, UserMetadata, ValidatedCallback};
pub use settings::AadGateSettings;
pub use validation::{CallbackValidator, EmailValidator};
