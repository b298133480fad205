use crate::helpers::{spawn_app, spawn_app_with, TestAdmin, TEST_HASH_COST};
use artisanhub::authentication::{hash_password, AdminRole};
use secrecy::Secret;
use strum::IntoEnumIterator;
use uuid::Uuid;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

async fn error_of(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.expect("Response is not JSON");
    body["error"].as_str().expect("No `error` field").to_string()
}

#[tokio::test]
async fn allowed_admin_gets_back_only_id_and_role() {
    // Arrange
    let app = spawn_app().await;
    let admin = TestAdmin::generate("Admin");
    app.store_holds(&admin).await;

    // Act
    let response = app.post_login(&admin.login_body()).await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers()["Content-Type"], "application/json");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "id": admin.id, "role": "Admin" })
    );
}

#[tokio::test]
async fn every_allow_listed_role_can_log_in() {
    let app = spawn_app().await;

    for role in AdminRole::iter() {
        let admin = TestAdmin::generate(role.as_ref());
        app.store_holds(&admin).await;

        let response = app.post_login(&admin.login_body()).await;

        assert_eq!(
            response.status().as_u16(),
            200,
            "Role {} was refused",
            role
        );
    }
}

#[tokio::test]
async fn hashes_written_by_other_bcrypt_implementations_are_accepted() {
    // Arrange
    let app = spawn_app().await;
    let email = "legacy@proconnect.ng";
    // OpenBSD `$2a$` test vector for the password "U*U"
    app.store_returns(
        email,
        serde_json::json!([{
            "id": "3f2c9a64-2c3e-4a5b-9d1e-6f0a7b8c9d10",
            "role": "Admin",
            "password_hash": "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW",
        }]),
    )
    .await;

    // Act
    let response = app
        .post_login(&serde_json::json!({ "email": email, "password": "U*U" }))
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["role"], "Admin");
}

#[tokio::test]
async fn numeric_admin_ids_are_echoed_unchanged() {
    // Arrange
    let app = spawn_app().await;
    let email = "numeric@proconnect.ng";
    let password_hash =
        hash_password(Secret::new("pw".to_string()), TEST_HASH_COST).expect("Failed to hash");
    app.store_returns(
        email,
        serde_json::json!([{ "id": 7, "role": "Admin", "password_hash": password_hash }]),
    )
    .await;

    // Act
    let response = app
        .post_login(&serde_json::json!({ "email": email, "password": "pw" }))
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "id": 7, "role": "Admin" }));
}

#[tokio::test]
async fn unknown_email_is_rejected_with_401() {
    let app = spawn_app().await;
    let admin = TestAdmin::generate("Admin");
    app.store_returns(&admin.email, serde_json::json!([])).await;

    let response = app.post_login(&admin.login_body()).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_of(response).await, "Invalid email or password");
}

#[tokio::test]
async fn wrong_password_looks_exactly_like_an_unknown_email() {
    // Arrange
    let app = spawn_app().await;
    let admin = TestAdmin::generate("Admin");
    let stranger = TestAdmin::generate("Admin");
    app.store_holds(&admin).await;
    app.store_returns(&stranger.email, serde_json::json!([])).await;

    // Act
    let wrong_password = app
        .post_login(&serde_json::json!({
            "email": admin.email,
            "password": Uuid::new_v4().to_string(),
        }))
        .await;
    let unknown_email = app.post_login(&stranger.login_body()).await;

    // Assert
    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);
    assert_eq!(
        wrong_password.text().await.unwrap(),
        unknown_email.text().await.unwrap()
    );
}

#[tokio::test]
async fn correct_password_with_a_non_admin_role_is_forbidden() {
    let app = spawn_app().await;
    let guest = TestAdmin::generate("Guest");
    app.store_holds(&guest).await;

    let response = app.post_login(&guest.login_body()).await;

    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(error_of(response).await, "User is not an admin");
}

#[tokio::test]
async fn role_matching_is_case_sensitive() {
    let app = spawn_app().await;
    let admin = TestAdmin::generate("admin");
    app.store_holds(&admin).await;

    let response = app.post_login(&admin.login_body()).await;

    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn credential_store_failure_is_reported_as_invalid_credentials() {
    let app = spawn_app().await;
    let admin = TestAdmin::generate("Admin");
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("relation \"admins\" does not exist"))
        .expect(1)
        .mount(&app.credential_store)
        .await;

    let response = app.post_login(&admin.login_body()).await;

    assert_eq!(response.status().as_u16(), 401);
    let body = response.text().await.unwrap();
    assert!(!body.contains("relation"));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body).unwrap(),
        serde_json::json!({ "error": "Invalid email or password" })
    );
}

#[tokio::test]
async fn missing_fields_are_rejected_without_a_lookup() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&app.credential_store)
        .await;
    let test_cases = vec![
        (serde_json::json!({ "email": "admin@proconnect.ng" }), "missing password"),
        (serde_json::json!({ "password": "hunter22" }), "missing email"),
        (serde_json::json!({}), "missing both"),
    ];

    for (body, description) in test_cases {
        let response = app.post_login(&body).await;

        assert_eq!(
            response.status().as_u16(),
            401,
            "The API did not reject the body when {}",
            description
        );
    }
}

#[tokio::test]
async fn malformed_body_is_an_opaque_internal_error() {
    let app = spawn_app().await;

    let response = app.post_login_raw("{ not json").await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(error_of(response).await, "Internal server error");
}

#[tokio::test]
async fn missing_service_role_key_is_an_internal_error() {
    let app = spawn_app_with(|settings| settings.credential_store.service_role_key = None).await;
    let admin = TestAdmin::generate("Admin");

    let response = app.post_login(&admin.login_body()).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(error_of(response).await, "Internal server error");
}

#[tokio::test]
async fn unreadable_stored_hash_is_an_internal_error() {
    let app = spawn_app().await;
    let admin = TestAdmin::generate("Admin");
    app.store_returns(
        &admin.email,
        serde_json::json!([{ "id": admin.id, "role": "Admin", "password_hash": "plaintext" }]),
    )
    .await;

    let response = app.post_login(&admin.login_body()).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(error_of(response).await, "Internal server error");
}

#[tokio::test]
async fn login_responses_carry_no_cors_headers() {
    let app = spawn_app().await;
    let admin = TestAdmin::generate("Admin");
    app.store_returns(&admin.email, serde_json::json!([])).await;

    let response = app.post_login(&admin.login_body()).await;

    assert!(response.headers().get("Access-Control-Allow-Origin").is_none());
}
