//! HTTP request builders for testing validators
//!
//! Fluent builder for creating `HttpRequest` values with the query strings,
//! headers, and cookies the callback validators inspect.

use actix_web::cookie::Cookie;
use actix_web::{test, HttpRequest};

use crate::utils::cookie::STATE_COOKIE;

/// Builder for creating HTTP requests for testing
pub struct RequestBuilder {
    uri: String,
    headers: Vec<(String, String)>,
    cookies: Vec<Cookie<'static>>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    /// Create a new request builder for a GET request to `/`
    #[must_use]
    pub fn new() -> Self {
        Self {
            uri: "/".to_string(),
            headers: Vec::new(),
            cookies: Vec::new(),
        }
    }

    /// Create a builder for an OAuth callback request with `code` and `state`
    /// query parameters
    #[must_use]
    pub fn callback(code: &str, state: &str) -> Self {
        Self::new().uri(&format!("/oauth/callback?code={code}&state={state}"))
    }

    /// Set the request URI
    #[must_use]
    pub fn uri(mut self, uri: &str) -> Self {
        self.uri = uri.to_string();
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a cookie to the request
    #[must_use]
    pub fn with_cookie(mut self, cookie: Cookie<'static>) -> Self {
        self.cookies.push(cookie);
        self
    }

    /// Add a state cookie with the provided value
    #[must_use]
    pub fn with_state_cookie(self, value: &str) -> Self {
        let cookie = Cookie::build(STATE_COOKIE, value.to_string())
            .path("/")
            .finish();
        self.with_cookie(cookie)
    }

    /// Add cookies from a raw cookie header string
    #[must_use]
    pub fn with_cookie_header(self, cookies: &str) -> Self {
        self.header("Cookie", cookies)
    }

    /// Build the final `HttpRequest`
    #[must_use]
    pub fn build(self) -> HttpRequest {
        let mut req = test::TestRequest::get().uri(&self.uri);

        for (name, value) in self.headers {
            req = req.insert_header((name, value));
        }

        for cookie in self.cookies {
            req = req.cookie(cookie);
        }

        req.to_http_request()
    }
}
