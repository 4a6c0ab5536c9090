//! Password reset request workflow integration tests.

use std::sync::Arc;

use signup_flow::providers::{MockIdentityProvider, MockNotifier};
use signup_flow::services::ResetRequester;
use signup_flow::{AppError, PasswordResetService, ResetOutcome};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();
}

#[tokio::test]
async fn empty_prompt_input_is_a_no_op() {
    init_tracing();

    let mut provider = MockIdentityProvider::new();
    provider.expect_send_password_reset().times(0);

    let mut notifier = MockNotifier::new();
    notifier.expect_notify().times(0);

    let reset = ResetRequester::new(Arc::new(provider), Arc::new(notifier));

    assert_eq!(reset.request_reset("").await, ResetOutcome::Skipped);
    assert_eq!(reset.request_reset("   ").await, ResetOutcome::Skipped);
}

#[tokio::test]
async fn accepted_request_confirms() {
    init_tracing();

    let mut provider = MockIdentityProvider::new();
    provider
        .expect_send_password_reset()
        .withf(|email| email == "ada@example.com")
        .times(1)
        .returning(|_| Ok(()));

    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .withf(|n| {
            n.is_success()
                && n.title == "Reset Link Sent!"
                && n.text.as_deref() == Some("Check your email to reset your password.")
        })
        .times(1)
        .return_const(());

    let reset = ResetRequester::new(Arc::new(provider), Arc::new(notifier));
    assert_eq!(reset.request_reset("ada@example.com").await, ResetOutcome::Sent);
}

#[tokio::test]
async fn prompt_input_is_trimmed_before_dispatch() {
    init_tracing();

    let mut provider = MockIdentityProvider::new();
    provider
        .expect_send_password_reset()
        .withf(|email| email == "ada@example.com")
        .times(1)
        .returning(|_| Ok(()));

    let mut notifier = MockNotifier::new();
    notifier.expect_notify().times(1).return_const(());

    let reset = ResetRequester::new(Arc::new(provider), Arc::new(notifier));
    assert_eq!(
        reset.request_reset("  ada@example.com ").await,
        ResetOutcome::Sent
    );
}

#[tokio::test]
async fn rejected_request_surfaces_provider_message() {
    init_tracing();

    let mut provider = MockIdentityProvider::new();
    provider
        .expect_send_password_reset()
        .times(1)
        .returning(|_| Err(AppError::provider("USER_NOT_FOUND")));

    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .withf(|n| {
            n.is_error()
                && n.title == "Reset Request Failed"
                && n.text.as_deref() == Some("USER_NOT_FOUND")
        })
        .times(1)
        .return_const(());

    let reset = ResetRequester::new(Arc::new(provider), Arc::new(notifier));
    assert_eq!(
        reset.request_reset("ada@example.com").await,
        ResetOutcome::Failed("USER_NOT_FOUND".to_string())
    );
}
