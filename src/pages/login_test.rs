use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::AuthResponse;
use crate::state::fakes::{FakeApi, MemoryStore};
use crate::state::session::SessionManager;

#[test]
fn validate_sign_in_trims_username_and_keeps_password() {
    assert_eq!(
        validate_sign_in("  alice  ", " pw "),
        Ok(Credentials::SignIn {
            username: "alice".to_owned(),
            password: " pw ".to_owned(),
        })
    );
}

#[test]
fn validate_sign_in_requires_both_fields() {
    assert_eq!(validate_sign_in("", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_sign_in("alice", "   "), Err("Enter both username and password."));
}

#[test]
fn validate_register_trims_and_requires_all_fields() {
    assert_eq!(
        validate_register(" bob ", " bob@x.com ", "pw"),
        Ok(Credentials::Register {
            username: "bob".to_owned(),
            email: "bob@x.com".to_owned(),
            password: "pw".to_owned(),
        })
    );
    assert_eq!(
        validate_register("bob", "", "pw"),
        Err("Fill in username, email, and password.")
    );
}

#[test]
fn validate_register_rejects_email_without_at() {
    assert_eq!(
        validate_register("bob", "bob.example.com", "pw"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn login_mode_toggles_between_forms() {
    assert_eq!(LoginMode::default(), LoginMode::SignIn);
    assert_eq!(LoginMode::SignIn.toggled(), LoginMode::Register);
    assert_eq!(LoginMode::Register.toggled(), LoginMode::SignIn);
    assert_eq!(LoginMode::Register.submit_label(), "Create Account");
}

// =============================================================
// Hand-over to the dashboard
// =============================================================

#[test]
fn successful_submit_alone_makes_page_enter_dashboard() {
    let api = FakeApi::with_auth(Ok(AuthResponse {
        token: "T".to_owned(),
        username: "alice".to_owned(),
        email: "alice@x.com".to_owned(),
    }));
    let manager = SessionManager::new(Arc::new(api), Arc::new(MemoryStore::default()));
    block_on(manager.initialize());
    assert!(!should_enter_dashboard(&manager.snapshot()));

    let credentials = validate_sign_in("alice", "pw").unwrap();
    assert!(block_on(manager.submit(credentials)).is_success());
    assert!(should_enter_dashboard(&manager.snapshot()));
}

#[test]
fn rejected_submit_keeps_page_on_login() {
    let api = FakeApi::with_auth(Err(ApiError::Status {
        status: 401,
        body: "bad credentials".to_owned(),
    }));
    let manager = SessionManager::new(Arc::new(api), Arc::new(MemoryStore::default()));
    block_on(manager.initialize());

    let credentials = validate_sign_in("alice", "wrong").unwrap();
    let outcome = block_on(manager.submit(credentials));
    assert_eq!(outcome.message(), Some("bad credentials"));
    assert!(!should_enter_dashboard(&manager.snapshot()));
}

#[test]
fn unverified_token_does_not_enter_dashboard() {
    assert!(!should_enter_dashboard(&Session::starting(Some("T".to_owned()))));
}
