use chrono::Utc;

use doorcode_listings::domain::types::SESSION_TOKEN_LEN;
use doorcode_listings::error::ListingsServiceError;
use doorcode_listings::usecase::session::{
    CheckAdminSessionUseCase, CreateAdminSessionUseCase, RevokeAdminSessionUseCase,
};

use crate::helpers::{MockSessionRepo, MockVerifier, TEST_ADMIN_PASSWORD, test_session};

#[tokio::test]
async fn should_create_session_for_correct_password() {
    let mock_repo = MockSessionRepo::empty();
    let sessions_handle = mock_repo.sessions_handle();

    let uc = CreateAdminSessionUseCase {
        credentials: MockVerifier::new(TEST_ADMIN_PASSWORD),
        sessions: mock_repo,
    };

    let session = uc.execute(TEST_ADMIN_PASSWORD).await.unwrap();

    assert_eq!(session.token.len(), SESSION_TOKEN_LEN);
    assert!(
        session.expires_at > Utc::now() + chrono::Duration::hours(23),
        "session should live for about a day"
    );

    // Verify the session record was actually persisted.
    let sessions = sessions_handle.lock().unwrap();
    assert_eq!(sessions.len(), 1, "expected exactly one session record");
    assert_eq!(sessions[0].token, session.token);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let mock_repo = MockSessionRepo::empty();
    let sessions_handle = mock_repo.sessions_handle();

    let uc = CreateAdminSessionUseCase {
        credentials: MockVerifier::new(TEST_ADMIN_PASSWORD),
        sessions: mock_repo,
    };

    let result = uc.execute("not-the-password").await;

    assert!(
        matches!(result, Err(ListingsServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
    assert!(
        sessions_handle.lock().unwrap().is_empty(),
        "no session should be persisted for a failed login"
    );
}

#[tokio::test]
async fn should_accept_valid_session_token() {
    let uc = CheckAdminSessionUseCase {
        sessions: MockSessionRepo::new(vec![test_session("valid-token", 3600)]),
    };

    let session = uc.execute("valid-token").await.unwrap();

    assert_eq!(session.token, "valid-token");
}

#[tokio::test]
async fn should_reject_unknown_session_token() {
    let uc = CheckAdminSessionUseCase {
        sessions: MockSessionRepo::empty(),
    };

    let result = uc.execute("no-such-token").await;

    assert!(
        matches!(result, Err(ListingsServiceError::InvalidSession)),
        "expected InvalidSession, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_expired_session_token() {
    let uc = CheckAdminSessionUseCase {
        sessions: MockSessionRepo::new(vec![test_session("stale-token", -1)]),
    };

    let result = uc.execute("stale-token").await;

    assert!(
        matches!(result, Err(ListingsServiceError::InvalidSession)),
        "expected InvalidSession, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_token_after_logout() {
    let mock_repo = MockSessionRepo::new(vec![test_session("login-token", 3600)]);
    let sessions_handle = mock_repo.sessions_handle();

    let revoke = RevokeAdminSessionUseCase {
        sessions: mock_repo,
    };
    revoke.execute("login-token").await.unwrap();

    assert!(sessions_handle.lock().unwrap().is_empty());

    let check = CheckAdminSessionUseCase {
        sessions: MockSessionRepo {
            sessions: sessions_handle,
        },
    };
    let result = check.execute("login-token").await;

    assert!(
        matches!(result, Err(ListingsServiceError::InvalidSession)),
        "expected InvalidSession, got {result:?}"
    );
}

#[tokio::test]
async fn should_ignore_revoking_unknown_token() {
    let uc = RevokeAdminSessionUseCase {
        sessions: MockSessionRepo::empty(),
    };

    uc.execute("never-issued").await.unwrap();
}
