//! OAuth callback validation
//!
//! Verifies that an authorization-code callback carries a `code` query
//! parameter and that its `state` parameter matches the `state` cookie
//! issued when the sign-in flow started (CSRF defense).

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, error};

use crate::models::{CallbackParams, ValidatedCallback};
use crate::utils::cookie::state_cookie_value;
use crate::utils::responses::ResponseBuilder;

/// OAuth callback validator with structured validation steps
pub struct CallbackValidator;

impl CallbackValidator {
    /// Main validation entry point for OAuth callbacks
    ///
    /// Extracts `code` and `state` from the request's query string and
    /// compares `state` against the `state` cookie. The comparison is over
    /// options: a callback with neither a state parameter nor a state cookie
    /// passes, matching the issuing flow that set neither.
    ///
    /// # Errors
    ///
    /// Returns an error response if:
    /// - The authorization code is missing (400)
    /// - The state parameter does not equal the state cookie (403)
    pub fn validate_and_extract(req: &HttpRequest) -> Result<ValidatedCallback, HttpResponse> {
        debug!("Starting OAuth callback validation");

        let params = Self::extract_params(req);
        let code = Self::require_authorization_code(params.code)?;
        let state = Self::verify_state(params.state, req)?;

        debug!("OAuth callback validation successful");
        Ok(ValidatedCallback { code, state })
    }

    /// Extract callback parameters from the request's query string
    ///
    /// Uses actix's query extractor; a query string that fails to parse is
    /// treated the same as one without `code` or `state`.
    #[must_use]
    pub fn extract_params(req: &HttpRequest) -> CallbackParams {
        web::Query::<CallbackParams>::from_query(req.query_string())
            .map(web::Query::into_inner)
            .unwrap_or_default()
    }

    /// Require the authorization code to be present
    ///
    /// The authorization code is needed for the token exchange and must be
    /// present in successful OAuth callbacks. An empty code counts as
    /// missing.
    fn require_authorization_code(code: Option<String>) -> Result<String, HttpResponse> {
        match code {
            Some(code) if !code.is_empty() => Ok(code),
            _ => {
                error!("No authorization code received in OAuth callback");
                Err(ResponseBuilder::missing_authorization_code())
            }
        }
    }

    /// Verify the state parameter against the state cookie
    ///
    /// Exact string equality over options: a present/absent mismatch fails,
    /// both absent passes. The matched state is echoed back unchanged.
    fn verify_state(
        state: Option<String>,
        req: &HttpRequest,
    ) -> Result<Option<String>, HttpResponse> {
        let state_cookie = state_cookie_value(req);
        if state == state_cookie {
            Ok(state)
        } else {
            error!("State parameter does not match state cookie");
            Err(ResponseBuilder::csrf_detected())
        }
    }
}
