//! Sign-in, sign-up, and contact flow tests against the stub API.

#![allow(clippy::unwrap_used)]

use fastbite_integration_tests::{OrderResponse, StubApi, test_session};
use fastbite_storefront::api::ContactMessage;

#[tokio::test]
async fn sign_in_stores_the_token_for_later_sessions() {
    let api = StubApi::spawn(OrderResponse::created()).await;
    let (mut session, notifier, dir) = test_session(&api.base_url);
    assert!(!session.is_signed_in());

    session.sign_in("asha@example.com", "hunter2aa").await.unwrap();

    assert!(session.is_signed_in());
    assert_eq!(notifier.last().as_deref(), Some("Signed in successfully."));
    assert_eq!(api.auth_requests(), 1);

    // A fresh session over the same store is still signed in.
    let store = fastbite_storefront::store::LocalStore::open(dir.path());
    assert_eq!(store.load_token().map(|t| t.expose().to_owned()).as_deref(), Some("stub-token"));
}

#[tokio::test]
async fn sign_up_stores_the_token_and_confirms() {
    let api = StubApi::spawn(OrderResponse::created()).await;
    let (mut session, notifier, _dir) = test_session(&api.base_url);

    session
        .sign_up("Asha", "asha@example.com", "hunter2aa", "hunter2aa")
        .await
        .unwrap();

    assert!(session.is_signed_in());
    assert_eq!(notifier.last().as_deref(), Some("Account created."));
    assert_eq!(api.auth_requests(), 1);
}

#[tokio::test]
async fn mismatched_passwords_never_reach_the_server() {
    let api = StubApi::spawn(OrderResponse::created()).await;
    let (mut session, notifier, _dir) = test_session(&api.base_url);

    let result = session
        .sign_up("Asha", "asha@example.com", "hunter2aa", "different")
        .await;

    assert!(result.is_err());
    assert_eq!(notifier.last().as_deref(), Some("Passwords do not match."));
    assert_eq!(api.auth_requests(), 0);
    assert!(!session.is_signed_in());
}

#[tokio::test]
async fn malformed_email_never_reaches_the_server() {
    let api = StubApi::spawn(OrderResponse::created()).await;
    let (mut session, _notifier, _dir) = test_session(&api.base_url);

    assert!(session.sign_in("not-an-email", "pw").await.is_err());
    assert_eq!(api.auth_requests(), 0);
}

#[tokio::test]
async fn sign_out_clears_the_stored_token() {
    let api = StubApi::spawn(OrderResponse::created()).await;
    let (mut session, _notifier, _dir) = test_session(&api.base_url);

    session.sign_in("asha@example.com", "hunter2aa").await.unwrap();
    assert!(session.is_signed_in());

    session.sign_out();
    assert!(!session.is_signed_in());
}

#[tokio::test]
async fn contact_message_is_delivered_and_thanked() {
    let api = StubApi::spawn(OrderResponse::created()).await;
    let (mut session, notifier, _dir) = test_session(&api.base_url);

    session
        .send_message(ContactMessage {
            name: "  Asha ".into(),
            email: "asha@example.com".into(),
            subject: "Feedback".into(),
            message: "The dosa was excellent.".into(),
        })
        .await
        .unwrap();

    assert_eq!(
        notifier.last().as_deref(),
        Some("Thank you! Your message has been received.")
    );
    assert_eq!(api.message_requests(), 1);
}
