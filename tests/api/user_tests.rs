//! User API Tests

use axum::http::StatusCode;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use user_api::domain::{NewUser, StoreError, User, UserChanges, UserLookup};

use crate::common::{fake_new_user, server_with_mock, user, MockStore, TestApp};

// ==========================================================================
// Against the in-memory store
// ==========================================================================

#[tokio::test]
async fn test_list_users_empty() {
    let app = TestApp::new();

    let response = app.server.get("/users").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_create_then_get_user() {
    let app = TestApp::new();
    let input = fake_new_user();

    let created = app.server.post("/users").json(&input).await;

    assert_eq!(created.status_code(), StatusCode::CREATED);
    let created: User = created.json();
    assert_eq!(created, input.clone().into_user(1).unwrap());

    let fetched = app.server.get("/users/1").await;

    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(fetched.json::<User>(), created);
}

#[tokio::test]
async fn test_list_users_returns_created_users_in_order() {
    let app = TestApp::new();
    for _ in 0..3 {
        app.server.post("/users").json(&fake_new_user()).await;
    }

    let users: Vec<User> = app.server.get("/users").await.json();

    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    let app = TestApp::new();

    let response = app.server.get("/users/999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Usuário não encontrado." })
    );
}

#[tokio::test]
async fn test_update_merges_partial_fields() {
    let app = TestApp::new();
    app.server
        .post("/users")
        .json(&json!({ "name": "Yves", "email": "yves@example.com", "phone": "123" }))
        .await;

    let response = app
        .server
        .put("/users/1")
        .json(&json!({ "name": "Yves Atualizado" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": 1, "name": "Yves Atualizado", "email": "yves@example.com", "phone": "123" })
    );
}

#[tokio::test]
async fn test_update_missing_user_returns_500() {
    let app = TestApp::new();

    let response = app
        .server
        .put("/users/999")
        .json(&json!({ "name": "Ninguém" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Usuário não encontrado." })
    );
}

#[tokio::test]
async fn test_delete_user_returns_204_then_404() {
    let app = TestApp::new();
    app.server.post("/users").json(&fake_new_user()).await;

    let deleted = app.server.delete("/users/1").await;

    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);
    assert!(deleted.text().is_empty());
    assert!(app.store.is_empty());

    let fetched = app.server.get("/users/1").await;
    assert_eq!(fetched.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_user_returns_500() {
    let app = TestApp::new();

    let response = app.server.delete("/users/42").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Usuário não encontrado." })
    );
}

#[test_case("abc" ; "letters")]
#[test_case("1.5" ; "decimal")]
#[test_case("99999999999999999999" ; "overflow")]
#[tokio::test]
async fn test_non_numeric_id_returns_400(id: &str) {
    let app = TestApp::new();

    let response = app.server.get(&format!("/users/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], format!("Invalid user ID: {}", id));
}

#[tokio::test]
async fn test_create_without_email_is_rejected_by_store() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/users")
        .json(&json!({ "name": "Sem Email" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Campo obrigatório ausente: email" })
    );
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_create_with_unreadable_body_reaches_store() {
    let app = TestApp::new();

    let response = app.server.post("/users").text("not json").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Campo obrigatório ausente: name" })
    );
}

#[tokio::test]
async fn test_requests_are_counted_in_metrics() {
    let app = TestApp::new();
    app.server.get("/users").await;

    let metrics = app.server.get("/metrics").await.text();

    assert!(metrics.contains("user_api_http_requests_total"));
    assert!(metrics.contains("path=\"/users\""));
}

// ==========================================================================
// Against a mocked store
// ==========================================================================

#[tokio::test]
async fn test_list_users_returns_store_sequence_verbatim() {
    let mut store = MockStore::new();
    store.expect_list_all().times(1).returning(|| {
        Ok(vec![
            user(1, "Yves", "yves@example.com"),
            user(2, "Teste", "teste@example.com"),
        ])
    });
    let server = server_with_mock(store);

    let response = server.get("/users").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!([
            { "id": 1, "name": "Yves", "email": "yves@example.com" },
            { "id": 2, "name": "Teste", "email": "teste@example.com" }
        ])
    );
}

#[tokio::test]
async fn test_get_user_store_failure_returns_500_with_message() {
    let mut store = MockStore::new();
    store
        .expect_find_by_id()
        .with(eq(1))
        .times(1)
        .returning(|_| Err(StoreError::failure("Erro ao buscar usuário")));
    let server = server_with_mock(store);

    let response = server.get("/users/1").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Erro ao buscar usuário" })
    );
}

#[tokio::test]
async fn test_get_user_not_found_calls_store_once() {
    let mut store = MockStore::new();
    store
        .expect_find_by_id()
        .with(eq(999))
        .times(1)
        .returning(|_| Ok(UserLookup::NotFound));
    let server = server_with_mock(store);

    let response = server.get("/users/999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_forwards_body_unchanged() {
    let input = NewUser::new("Novo", "novo@example.com", Some("123456789".to_string()));

    let mut store = MockStore::new();
    store
        .expect_create()
        .with(eq(input.clone()))
        .times(1)
        .returning(|user| user.into_user(3));
    let server = server_with_mock(store);

    let response = server.post("/users").json(&input).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": 3, "name": "Novo", "email": "novo@example.com", "phone": "123456789" })
    );
}

#[tokio::test]
async fn test_create_forwards_incomplete_body_to_store() {
    let mut store = MockStore::new();
    store
        .expect_create()
        .with(eq(NewUser {
            name: Some("Sem Email".to_string()),
            email: None,
            phone: None,
        }))
        .times(1)
        .returning(|user| user.into_user(1));
    let server = server_with_mock(store);

    let response = server
        .post("/users")
        .json(&json!({ "name": "Sem Email" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Campo obrigatório ausente: email" })
    );
}

#[tokio::test]
async fn test_update_forwards_numeric_id_and_body() {
    let changes = UserChanges {
        name: Some("Yves Atualizado".to_string()),
        email: Some("yves_atualizado@example.com".to_string()),
        phone: Some("987654321".to_string()),
    };

    let mut store = MockStore::new();
    store
        .expect_update()
        .with(eq(1), eq(changes.clone()))
        .times(1)
        .returning(|id, changes| {
            let mut updated = user(id, "Yves", "yves@example.com");
            changes.apply_to(&mut updated);
            Ok(updated)
        });
    let server = server_with_mock(store);

    let response = server.put("/users/1").json(&changes).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<User>(),
        User {
            id: 1,
            name: "Yves Atualizado".to_string(),
            email: "yves_atualizado@example.com".to_string(),
            phone: Some("987654321".to_string()),
        }
    );
}

#[tokio::test]
async fn test_delete_store_failure_returns_500() {
    let mut store = MockStore::new();
    store
        .expect_delete()
        .with(eq(1))
        .times(1)
        .returning(|_| Err(StoreError::failure("Erro ao deletar usuário")));
    let server = server_with_mock(store);

    let response = server.delete("/users/1").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Erro ao deletar usuário" })
    );
}
