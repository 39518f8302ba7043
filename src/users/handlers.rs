use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{error, info, instrument, warn};

use crate::{
    state::AppState,
    users::{
        dto::{CreateUserRequest, CreatedUser, ErrorBody},
        repo::User,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user", post(create_user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<CreatedUser>, (StatusCode, Json<ErrorBody>)> {
    let email = match payload.email {
        Some(e) if !e.is_empty() => e,
        _ => {
            warn!("create user without email");
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Email required".into(),
                }),
            ));
        }
    };

    match User::insert(&state.db, &email).await {
        Ok(user) => {
            info!(user_id = user.id, email = %user.email, "user created");
            Ok(Json(CreatedUser {
                id: user.id,
                email: user.email,
            }))
        }
        Err(e) => {
            error!(error = %e, "insert user failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_app;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn post_user(app: axum::Router, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/user")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    async fn count_users(db: &sqlx::SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_user_returns_id_and_echoes_email() {
        let app = build_app(AppState::for_tests().await);

        let (status, json) = post_user(app, r#"{"email":"a@example.com"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "a@example.com");
    }

    #[tokio::test]
    async fn ids_increase_across_inserts() {
        let app = build_app(AppState::for_tests().await);

        let mut last = 0;
        for email in ["a@example.com", "b@example.com", "c@example.com"] {
            let body = format!(r#"{{"email":"{email}"}}"#);
            let (status, json) = post_user(app.clone(), &body).await;
            assert_eq!(status, StatusCode::OK);
            let id = json["id"].as_i64().unwrap();
            assert!(id > last);
            last = id;
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_and_not_duplicated() {
        let state = AppState::for_tests().await;
        let app = build_app(state.clone());

        let (status, json) = post_user(app.clone(), r#"{"email":"dup@example.com"}"#).await;
        assert_eq!(status, StatusCode::OK);
        let first_id = json["id"].as_i64().unwrap();

        let (status, json) = post_user(app, r#"{"email":"dup@example.com"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().unwrap().contains("UNIQUE"));

        let survivor = User::find_by_email(&state.db, "dup@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(survivor.id, first_id);
        assert_eq!(count_users(&state.db).await, 1);
    }

    #[tokio::test]
    async fn missing_email_is_a_400() {
        let state = AppState::for_tests().await;
        let app = build_app(state.clone());

        let (status, json) = post_user(app, "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Email required");
        assert_eq!(count_users(&state.db).await, 0);
    }

    #[tokio::test]
    async fn empty_email_is_a_400() {
        let state = AppState::for_tests().await;
        let app = build_app(state.clone());

        let (status, json) = post_user(app, r#"{"email":""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Email required");
        assert_eq!(count_users(&state.db).await, 0);
    }
}
