use actix_web::HttpRequest;

/// Name of the anti-CSRF state cookie issued alongside the sign-in redirect
pub const STATE_COOKIE: &str = "state";

/// Extract the state cookie value from a request, if present
#[must_use]
pub fn state_cookie_value(req: &HttpRequest) -> Option<String> {
    req.cookie(STATE_COOKIE)
        .map(|cookie| cookie.value().to_string())
}
