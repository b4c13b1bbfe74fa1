// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{require_api_key, ApiKeyAuth},
    models::{CreateUserRequest, UpdateUserRequest, User},
    state::AppState,
};

pub mod health;
pub mod users;

/// Assemble the application router.
///
/// The `/users` subtree sits behind the API key gate; `/health` and the API
/// docs are mounted outside it. Create is matched on `/users/` exactly, so a
/// POST anywhere else under `/users` answers 405 rather than creating.
pub fn router(state: AppState, auth: ApiKeyAuth) -> Router {
    let user_routes = Router::new()
        .route("/users", get(users::list_users))
        .route("/users/", post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .layer(middleware::from_fn_with_state(auth, require_api_key))
        .with_state(state);

    Router::new()
        .route("/health", get(health::health))
        .merge(user_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        health::health
    ),
    components(schemas(User, CreateUserRequest, UpdateUserRequest)),
    tags(
        (name = "Users", description = "User directory CRUD"),
        (name = "Health", description = "Liveness probes")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::storage::repository::testing::CountingRepository;
    use crate::storage::InMemoryUserRepository;

    const TEST_KEY: &str = "test-key";

    fn test_router() -> (Router, Arc<CountingRepository>) {
        let repo = Arc::new(CountingRepository::wrapping(Arc::new(
            InMemoryUserRepository::new(),
        )));
        let state = AppState::with_repository(repo.clone());
        (router(state, ApiKeyAuth::new(TEST_KEY)), repo)
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("X-API-Key", TEST_KEY)
            .body(Body::empty())
            .unwrap()
    }

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("X-API-Key", TEST_KEY)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let (app, _) = test_router();
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn health_requires_no_credential() {
        let (app, _) = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn missing_api_key_is_401_and_store_is_never_queried() {
        let (app, repo) = test_router();

        let response = app
            .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "API key is missing");
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn empty_api_key_counts_as_missing() {
        let (app, repo) = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/users")
                    .header("X-API-Key", "")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "API key is missing");
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn wrong_api_key_is_401_and_store_is_never_queried() {
        let (app, repo) = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/users")
                    .header("X-API-Key", "wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid API key");
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn valid_key_lists_empty_store_as_empty_array() {
        let (app, repo) = test_router();

        let response = app.oneshot(request(Method::GET, "/users")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"[]");
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn create_returns_201_with_assigned_id() {
        let (app, _) = test_router();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/users/",
                r#"{"username":"alice","email":"a@x.com"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({"id": 1, "username": "alice", "email": "a@x.com"})
        );
    }

    #[tokio::test]
    async fn create_requires_the_trailing_slash_route() {
        let (app, repo) = test_router();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/users",
                r#"{"username":"alice","email":"a@x.com"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/users/7",
                r#"{"username":"alice","email":"a@x.com"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn malformed_body_is_400_without_store_access() {
        let (app, repo) = test_router();

        let response = app
            .oneshot(json_request(Method::POST, "/users/", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn non_integer_id_is_400_without_store_access() {
        let (app, repo) = test_router();

        let response = app.oneshot(request(Method::GET, "/users/abc")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn get_unknown_user_is_404() {
        let (app, _) = test_router();

        let response = app.oneshot(request(Method::GET, "/users/999")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn full_crud_flow_over_the_wire() {
        let (app, _) = test_router();

        let created = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/users/",
                r#"{"username":"alice","email":"a@x.com"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let id = body_json(created).await["id"].as_i64().unwrap();

        let updated = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/users/{id}"),
                r#"{"username":"alicia","email":"alicia@x.com"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(updated.status(), StatusCode::OK);
        assert_eq!(body_json(updated).await["username"], "alicia");

        let deleted = app
            .clone()
            .oneshot(request(Method::DELETE, &format!("/users/{id}")))
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let gone = app
            .oneshot(request(Method::DELETE, &format!("/users/{id}")))
            .await
            .unwrap();
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unsupported_method_on_recognized_path_is_405() {
        let (app, _) = test_router();

        let response = app
            .oneshot(request(Method::PATCH, "/users/1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
