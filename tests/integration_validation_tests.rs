//! Integration tests for the callback and email validators
//!
//! Exercises the validators through real `HttpRequest` values, checking the
//! exact status codes and plaintext bodies a client would receive.

use actix_web::body::MessageBody;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use aadgate::settings::EmailSettings;
use aadgate::testing::RequestBuilder;
use aadgate::utils::responses;
use aadgate::{AadGateSettings, CallbackValidator, EmailValidator, UserMetadata};

fn body_string(response: HttpResponse) -> String {
    let bytes = response
        .into_body()
        .try_into_bytes()
        .expect("body should be in memory");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

fn student_settings() -> AadGateSettings {
    AadGateSettings {
        email: EmailSettings {
            pattern: r"^(\d{2})f(\d+)@example\.edu$".to_string(),
            denylist: "21f666@example.edu".to_string(),
        },
        ..AadGateSettings::default()
    }
}

#[test]
fn callback_then_email_happy_path() {
    let req = RequestBuilder::callback("auth_code", "csrf_token")
        .with_state_cookie("csrf_token")
        .build();

    let callback = CallbackValidator::validate_and_extract(&req).expect("callback should pass");
    assert_eq!(callback.code, "auth_code");
    assert_eq!(callback.state.as_deref(), Some("csrf_token"));

    let settings = student_settings();
    let metadata =
        EmailValidator::verify(&settings, "22f1234567@example.edu").expect("email should pass");
    assert_eq!(
        metadata,
        UserMetadata {
            year: 2022,
            index: 1_234_567
        }
    );
}

#[test]
fn missing_code_is_bad_request() {
    let req = RequestBuilder::new()
        .uri("/oauth/callback?state=csrf_token")
        .with_state_cookie("csrf_token")
        .build();

    let response = CallbackValidator::validate_and_extract(&req).unwrap_err();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response), responses::MISSING_CODE_BODY);
}

#[test]
fn forged_state_is_forbidden() {
    let req = RequestBuilder::callback("auth_code", "attacker_token")
        .with_state_cookie("csrf_token")
        .build();

    let response = CallbackValidator::validate_and_extract(&req).unwrap_err();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_string(response), responses::CSRF_BODY);
}

#[test]
fn missing_cookie_with_present_state_is_forbidden() {
    let req = RequestBuilder::callback("auth_code", "csrf_token").build();

    let response = CallbackValidator::validate_and_extract(&req).unwrap_err();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_string(response), responses::CSRF_BODY);
}

#[test]
fn state_cookie_parsed_from_raw_header() {
    let req = RequestBuilder::callback("auth_code", "csrf_token")
        .with_cookie_header("session=keep; state=csrf_token")
        .build();

    let callback = CallbackValidator::validate_and_extract(&req).expect("callback should pass");
    assert_eq!(callback.state.as_deref(), Some("csrf_token"));
}

#[test]
fn foreign_email_is_forbidden() {
    let settings = student_settings();
    let response = EmailValidator::verify(&settings, "someone@gmail.com").unwrap_err();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_string(response), responses::EMAIL_INVALID_BODY);
}

#[test]
fn denylisted_email_is_forbidden() {
    let settings = student_settings();
    let response = EmailValidator::verify(&settings, "21f666@example.edu").unwrap_err();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_string(response), responses::EMAIL_DENIED_BODY);
}

#[test]
fn nineteen_hundreds_year_suffix() {
    let settings = student_settings();
    let metadata = EmailValidator::verify(&settings, "85f42@example.edu").expect("should pass");
    assert_eq!(metadata.year, 1985);
    assert_eq!(metadata.index, 42);
}

#[test]
fn validators_are_pure() {
    let req = RequestBuilder::callback("auth_code", "csrf_token")
        .with_state_cookie("csrf_token")
        .build();
    let settings = student_settings();

    let first = CallbackValidator::validate_and_extract(&req).unwrap();
    let second = CallbackValidator::validate_and_extract(&req).unwrap();
    assert_eq!(first, second);

    let first = EmailValidator::verify(&settings, "22f7@example.edu").unwrap();
    let second = EmailValidator::verify(&settings, "22f7@example.edu").unwrap();
    assert_eq!(first, second);
}
