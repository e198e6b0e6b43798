//! HTTP response construction
//!
//! Unified interface for the fixed plaintext error responses this crate
//! emits. Every validation failure maps to one of these responses; the
//! caller returns them to the client unchanged.

use actix_web::{http::header, HttpResponse};

/// Body returned when the callback carries no authorization code (400)
pub const MISSING_CODE_BODY: &str = "Missing OAuth authorization code.";

/// Body returned when the state parameter and cookie disagree (403)
pub const CSRF_BODY: &str = "Cross-site request forgery detected.";

/// Body returned when an email does not match the configured pattern (403)
pub const EMAIL_INVALID_BODY: &str = "Your email is not valid for this AAD.";

/// Body returned when an email is on the denylist (403)
pub const EMAIL_DENIED_BODY: &str = "Nice try ;)";

/// Unified response builder for the crate's error responses
pub struct ResponseBuilder;

impl ResponseBuilder {
    /// Create a `BadRequest` (400) response with a plaintext body
    #[must_use]
    pub fn bad_request(body: &'static str) -> HttpResponse {
        HttpResponse::BadRequest()
            .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(body)
    }

    /// Create a `Forbidden` (403) response with a plaintext body
    #[must_use]
    pub fn forbidden(body: &'static str) -> HttpResponse {
        HttpResponse::Forbidden()
            .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(body)
    }

    /// Callback arrived without an authorization code
    #[must_use]
    pub fn missing_authorization_code() -> HttpResponse {
        Self::bad_request(MISSING_CODE_BODY)
    }

    /// State parameter did not match the state cookie
    #[must_use]
    pub fn csrf_detected() -> HttpResponse {
        Self::forbidden(CSRF_BODY)
    }

    /// Email did not match the configured organization pattern
    #[must_use]
    pub fn email_not_valid() -> HttpResponse {
        Self::forbidden(EMAIL_INVALID_BODY)
    }

    /// Email is denylisted
    #[must_use]
    pub fn email_denied() -> HttpResponse {
        Self::forbidden(EMAIL_DENIED_BODY)
    }
}
