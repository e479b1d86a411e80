use super::{TEST_PASSWORD, TEST_TOKEN, spawn_server};
use taskboard_client::api::AuthApi;
use taskboard_client::error::AppError;
use taskboard_client::models::{ChangePasswordRequest, LoginRequest};

fn change_request() -> ChangePasswordRequest {
    ChangePasswordRequest {
        current_password: TEST_PASSWORD.into(),
        new_password: "n3w-Password".into(),
    }
}

#[tokio::test]
async fn change_password_needs_login() {
    let (client, _server) = spawn_server().await;

    let err = AuthApi::change_password(&client.api, &change_request())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Auth { .. }));

    let login = LoginRequest {
        email: "john@example.com".into(),
        password: TEST_PASSWORD.into(),
    };
    let response = AuthApi::login(&client.api, &login).await.unwrap();
    assert_eq!(response.access_token.as_deref(), Some(TEST_TOKEN));
    assert_eq!(client.api.access_token().await.as_deref(), Some(TEST_TOKEN));

    let changed = AuthApi::change_password(&client.api, &change_request())
        .await
        .unwrap();
    assert_eq!(changed["message"], "Password changed");
}

#[tokio::test]
async fn bad_credentials_use_error_field() {
    let (client, _server) = spawn_server().await;
    let login = LoginRequest {
        email: "john@example.com".into(),
        password: "wrong-password".into(),
    };
    let err = AuthApi::login(&client.api, &login).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), "Invalid credentials");
    assert!(!client.api.is_authenticated().await);
}
