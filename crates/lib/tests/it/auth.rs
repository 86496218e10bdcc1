//! Credential ledger, throttle guard, and session model tests.

use thoteca::auth::{AuthError, SessionUser, StoredUser, UserLedger};
use thoteca::constants::USERS;
use thoteca::Error;

use crate::helpers::*;

fn stored_users(instance: &thoteca::Thoteca) -> UserLedger {
    instance.store().load(USERS, UserLedger::new())
}

#[test]
fn short_username_is_a_validation_error() {
    let (instance, _clock) = test_instance();

    let err = instance.login("ab", "123456").expect_err("username too short");
    assert!(err.is_validation());
    assert!(stored_users(&instance).is_empty());
    assert!(!instance.current_user().logged);
}

#[test]
fn short_password_is_a_validation_error() {
    let (instance, _clock) = test_instance();

    let err = instance.login("ab_12", "short").expect_err("password too short");
    assert!(matches!(
        err,
        Error::Auth(AuthError::PasswordTooShort { .. })
    ));
    assert!(stored_users(&instance).is_empty());
}

#[test]
fn first_login_registers_and_logs_in() {
    let (instance, _clock) = test_instance();

    let session = instance.login("reader1", "secret1").expect("first login");
    assert_eq!(session.name, "reader1");
    assert!(session.logged);
    assert!(session.joined.is_some());

    let users = stored_users(&instance);
    assert_eq!(users.len(), 1);
    assert!(users.contains_key("reader1"));
    assert_eq!(instance.current_user(), session);
}

#[test]
fn wrong_password_fails_and_hash_is_first_write_wins() {
    let (instance, _clock) = test_instance();

    instance.login("reader1", "secret1").expect("register");
    let original: StoredUser = stored_users(&instance)["reader1"].clone();

    let err = instance
        .login("reader1", "different")
        .expect_err("wrong password");
    assert!(matches!(err, Error::Auth(AuthError::InvalidCredentials)));
    assert_eq!(stored_users(&instance)["reader1"], original);
}

#[test]
fn sixth_attempt_is_locked_out_even_with_the_right_password() {
    let (instance, _clock) = test_instance();
    instance.login("reader1", "secret1").expect("register");
    instance.logout();

    for _ in 0..5 {
        let err = instance
            .login("reader1", "wrong-password")
            .expect_err("bad password");
        assert!(matches!(err, Error::Auth(AuthError::InvalidCredentials)));
    }

    let err = instance
        .login("reader1", "secret1")
        .expect_err("locked out despite correct password");
    assert!(err.is_locked_out());
}

#[test]
fn validation_failures_do_not_touch_the_throttle() {
    let (instance, _clock) = test_instance();
    instance.login("reader1", "secret1").expect("register");
    instance.logout();

    for _ in 0..4 {
        let _ = instance.login("reader1", "wrong-password");
    }
    // A malformed username is rejected before the ledger and the counter.
    let _ = instance.login("a", "123456");

    // Four failures plus one validation error: still below the threshold.
    instance
        .login("reader1", "secret1")
        .expect("not locked out yet");
}

#[test]
fn successful_login_resets_the_throttle() {
    let (instance, _clock) = test_instance();
    instance.login("reader1", "secret1").expect("register");

    for _ in 0..4 {
        let _ = instance.login("reader1", "wrong-password");
    }
    instance.login("reader1", "secret1").expect("reset");

    // The counter starts over: four more failures do not lock.
    for _ in 0..4 {
        let _ = instance.login("reader1", "wrong-password");
    }
    instance.login("reader1", "secret1").expect("still usable");
}

#[test]
fn logout_restores_the_visitor_identity() {
    let (instance, _clock) = logged_in_instance();

    instance.logout();
    assert_eq!(instance.current_user(), SessionUser::visitor());
    assert_eq!(instance.current_user().name, "Visitante");
}

#[test]
fn second_account_login_overwrites_the_session_singleton() {
    let (instance, _clock) = logged_in_instance();

    instance.login("reader2", "secret2").expect("second account");
    let current = instance.current_user();
    assert_eq!(current.name, "reader2");
    assert_eq!(stored_users(&instance).len(), 2);
}

#[test]
fn returning_reader_keeps_the_original_join_timestamp() {
    let (instance, clock) = test_instance();

    let first = instance.login("reader1", "secret1").expect("register");
    instance.logout();
    clock.advance(86_400_000); // next day

    let second = instance.login("reader1", "secret1").expect("verify");
    assert_eq!(second.joined, first.joined);
}

#[test]
fn avatar_is_two_uppercase_initials() {
    let user = SessionUser {
        name: "reader1".to_string(),
        logged: true,
        joined: None,
    };
    assert_eq!(user.avatar(), "RE");
    assert_eq!(SessionUser::visitor().avatar(), "VI");
}
