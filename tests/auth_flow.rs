//! Authentication flow integration tests
//!
//! Exercises the signup/login/refresh handlers and the identity resolver
//! against a real database. These tests need a running PostgreSQL (pointed
//! at by DATABASE_URL) and are ignored by default:
//!
//! ```sh
//! cargo test -- --ignored
//! ```

mod common;

use axum::extract::State;
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::Json;
use serial_test::serial;

use notably::auth::handlers::types::{ChangePasswordRequest, LoginRequest, SignupRequest};
use notably::auth::handlers::{change_password, login, refresh, signup};
use notably::auth::resolver::resolve_identity;
use notably::auth::tokens::TokenKind;
use notably::auth::users;
use notably::categories;
use notably::error::ApiError;
use notably::middleware::auth::CurrentUser;

use common::auth_helpers::{auth_header, create_test_user, test_state};
use common::database::TestDatabase;

fn signup_request(username: &str, email: &str, password: &str) -> SignupRequest {
    SignupRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth_header(token).parse().unwrap());
    headers
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn signup_creates_account_with_default_category() {
    let db = TestDatabase::new().await;
    let state = test_state(db.pool());

    let (status, Json(user)) = signup(
        State(state),
        Json(signup_request("alice", "alice@example.com", "password123")),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user.email, "alice@example.com");

    let default = categories::db::find_by_name(db.pool(), user.id, categories::DEFAULT_CATEGORY)
        .await
        .unwrap();
    assert!(default.is_some());
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn signup_rejects_duplicate_email() {
    let db = TestDatabase::new().await;
    let state = test_state(db.pool());

    create_test_user(db.pool(), "taken@example.com", "password123").await;

    let err = signup(
        State(state),
        Json(signup_request("bob", "taken@example.com", "password123")),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn login_returns_resolvable_token_pair() {
    let db = TestDatabase::new().await;
    let state = test_state(db.pool());

    let user = create_test_user(db.pool(), "alice@example.com", "password123").await;

    let Json(pair) = login(
        State(state.clone()),
        Json(LoginRequest {
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(pair.token_type, "bearer");

    // The access token resolves to the account that logged in.
    let resolved = resolve_identity(db.pool(), &state.tokens, &pair.access_token, TokenKind::Access)
        .await
        .unwrap();
    assert_eq!(resolved.id, user.id);

    // The refresh token only resolves under the refresh kind.
    assert!(
        resolve_identity(db.pool(), &state.tokens, &pair.refresh_token, TokenKind::Access)
            .await
            .is_err()
    );
    assert!(
        resolve_identity(db.pool(), &state.tokens, &pair.refresh_token, TokenKind::Refresh)
            .await
            .is_ok()
    );
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn login_failures_are_indistinguishable() {
    let db = TestDatabase::new().await;
    let state = test_state(db.pool());

    create_test_user(db.pool(), "a@x.com", "rightpass").await;

    let wrong_password = login(
        State(state.clone()),
        Json(LoginRequest {
            email: "a@x.com".to_string(),
            password: "wrongpass".to_string(),
        }),
    )
    .await
    .unwrap_err();

    let unknown_email = login(
        State(state),
        Json(LoginRequest {
            email: "nobody@x.com".to_string(),
            password: "wrongpass".to_string(),
        }),
    )
    .await
    .unwrap_err();

    assert!(matches!(wrong_password, ApiError::InvalidCredentials));
    assert!(matches!(unknown_email, ApiError::InvalidCredentials));
    assert_eq!(wrong_password.message(), unknown_email.message());
    assert_eq!(wrong_password.status_code(), unknown_email.status_code());
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn refresh_exchanges_refresh_token_for_access_token() {
    let db = TestDatabase::new().await;
    let state = test_state(db.pool());

    let user = create_test_user(db.pool(), "alice@example.com", "password123").await;
    let refresh_token = state.tokens.issue_refresh(user.id).unwrap();

    let Json(response) = refresh(State(state.clone()), bearer_headers(&refresh_token))
        .await
        .unwrap();

    assert_eq!(response.token_type, "bearer");

    let resolved = resolve_identity(
        db.pool(),
        &state.tokens,
        &response.access_token,
        TokenKind::Access,
    )
    .await
    .unwrap();
    assert_eq!(resolved.id, user.id);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn refresh_rejects_access_tokens() {
    let db = TestDatabase::new().await;
    let state = test_state(db.pool());

    let user = create_test_user(db.pool(), "alice@example.com", "password123").await;
    let access_token = state.tokens.issue_access(user.id).unwrap();

    let err = refresh(State(state), bearer_headers(&access_token))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn resolution_fails_closed_for_deleted_accounts() {
    let db = TestDatabase::new().await;
    let state = test_state(db.pool());

    let user = create_test_user(db.pool(), "gone@example.com", "password123").await;
    let access_token = state.tokens.issue_access(user.id).unwrap();

    users::delete_user(db.pool(), user.id).await.unwrap();

    let err = resolve_identity(db.pool(), &state.tokens, &access_token, TokenKind::Access)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn change_password_enforces_current_and_novelty() {
    let db = TestDatabase::new().await;
    let state = test_state(db.pool());

    let user = create_test_user(db.pool(), "alice@example.com", "oldpassword").await;

    let wrong_current = change_password(
        State(state.clone()),
        CurrentUser(user.clone()),
        Json(ChangePasswordRequest {
            current_password: "not-the-password".to_string(),
            new_password: "newpassword".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(wrong_current, ApiError::Forbidden(_)));

    let same_as_current = change_password(
        State(state.clone()),
        CurrentUser(user.clone()),
        Json(ChangePasswordRequest {
            current_password: "oldpassword".to_string(),
            new_password: "oldpassword".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(same_as_current, ApiError::BadRequest(_)));

    change_password(
        State(state.clone()),
        CurrentUser(user),
        Json(ChangePasswordRequest {
            current_password: "oldpassword".to_string(),
            new_password: "newpassword".to_string(),
        }),
    )
    .await
    .unwrap();

    // The new password logs in.
    login(
        State(state),
        Json(LoginRequest {
            email: "alice@example.com".to_string(),
            password: "newpassword".to_string(),
        }),
    )
    .await
    .unwrap();
}
