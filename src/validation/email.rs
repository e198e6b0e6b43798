//! Organization email validation
//!
//! Matches an authenticated user's email against the configured AAD pattern,
//! rejects denylisted addresses, and derives [`UserMetadata`] from the
//! pattern's capture groups. The denylist is consulted only after a
//! successful pattern match.

use actix_web::HttpResponse;
use log::{debug, error};
use regex::{Captures, Regex};

use crate::models::UserMetadata;
use crate::settings::AadGateSettings;
use crate::utils::responses::ResponseBuilder;

/// Years at or below this two-digit suffix resolve to the 2000s
const YEAR_PIVOT: u32 = 80;

/// Organization email validator with structured validation steps
pub struct EmailValidator;

impl EmailValidator {
    /// Main validation entry point for organization emails
    ///
    /// # Errors
    ///
    /// Returns a 403 error response if:
    /// - The email does not match the configured pattern
    /// - The email is on the configured denylist
    pub fn verify(
        settings: &AadGateSettings,
        email: &str,
    ) -> Result<UserMetadata, HttpResponse> {
        debug!("Starting email validation");

        let captures = Self::match_pattern(&settings.email.pattern, email)?;
        Self::check_denylist(&settings.email.denylist, email)?;
        let metadata = Self::extract_metadata(&captures);

        debug!("Email validation successful");
        Ok(metadata)
    }

    /// Match the email against the configured pattern
    ///
    /// The pattern is compiled Unicode-aware. A pattern that fails to
    /// compile rejects every email; the operator error is logged rather than
    /// surfaced to the client.
    fn match_pattern<'h>(
        pattern: &str,
        email: &'h str,
    ) -> Result<Captures<'h>, HttpResponse> {
        let regex = Regex::new(pattern).map_err(|e| {
            error!("Invalid AAD email pattern: {e}");
            ResponseBuilder::email_not_valid()
        })?;

        regex.captures(email).ok_or_else(|| {
            error!("Email does not match the AAD pattern");
            ResponseBuilder::email_not_valid()
        })
    }

    /// Reject emails on the configured denylist
    ///
    /// The denylist is a comma-separated list of exact addresses. Runs only
    /// after the pattern matched.
    fn check_denylist(denylist: &str, email: &str) -> Result<(), HttpResponse> {
        if denylist.split(',').any(|entry| entry == email) {
            error!("Denylisted email attempted to authenticate");
            return Err(ResponseBuilder::email_denied());
        }
        Ok(())
    }

    /// Derive user metadata from the pattern's capture groups
    ///
    /// The first group is a two-digit matriculation year suffix, the second
    /// a numeric member index. Suffixes above [`YEAR_PIVOT`] resolve to the
    /// 1900s. Absent, empty, or non-numeric groups yield zeroed metadata.
    fn extract_metadata(captures: &Captures<'_>) -> UserMetadata {
        let group = |i: usize| {
            captures
                .get(i)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
        };

        let suffix = group(1).and_then(|s| s.parse::<u32>().ok());
        let index = group(2).and_then(|s| s.parse::<u64>().ok());

        match (suffix, index) {
            (Some(suffix), Some(index)) => UserMetadata {
                year: if suffix > YEAR_PIVOT {
                    1900 + suffix
                } else {
                    2000 + suffix
                },
                index,
            },
            _ => UserMetadata::default(),
        }
    }
}
