//! Unit tests for the characters crate
//! The database is replaced by an in-memory repository with the same
//! ownership scoping.

use std::sync::{Arc, Mutex};

use kernel::id::CharacterId;

use crate::application::service::{CharacterInput, CharacterService};
use crate::domain::draft::CharacterDraft;
use crate::domain::entity::Character;
use crate::domain::repository::CharacterRepository;
use crate::error::{CharacterError, CharacterResult};

#[derive(Clone, Default)]
struct InMemoryCharacterRepository {
    rows: Arc<Mutex<Vec<Character>>>,
}

impl CharacterRepository for InMemoryCharacterRepository {
    async fn list_for_user(&self, user_id: &str) -> CharacterResult<Vec<Character>> {
        let rows = self.rows.lock().unwrap();
        let mut owned: Vec<Character> = rows
            .iter()
            .rev()
            .filter(|c| c.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find(&self, user_id: &str, id: CharacterId) -> CharacterResult<Option<Character>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|c| c.id == id && c.is_owned_by(user_id))
            .cloned())
    }

    async fn create(&self, user_id: &str, draft: &CharacterDraft) -> CharacterResult<Character> {
        let character = Character::new(user_id, draft);
        self.rows.lock().unwrap().push(character.clone());
        Ok(character)
    }

    async fn update(
        &self,
        user_id: &str,
        id: CharacterId,
        draft: &CharacterDraft,
    ) -> CharacterResult<Option<Character>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .iter_mut()
            .find(|c| c.id == id && c.is_owned_by(user_id))
            .map(|c| {
                c.apply(draft);
                c.clone()
            }))
    }

    async fn delete(&self, user_id: &str, id: CharacterId) -> CharacterResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| !(c.id == id && c.is_owned_by(user_id)));
        Ok(rows.len() < before)
    }
}

fn input(name: &str, level: i64) -> CharacterInput {
    CharacterInput {
        name: name.to_string(),
        race: Some("srd_elf".to_string()),
        class: Some("srd_wizard".to_string()),
        subclass: Some("".to_string()),
        background: None,
        level,
    }
}

#[cfg(test)]
mod service_tests {
    use super::*;

    fn service() -> CharacterService<InMemoryCharacterRepository> {
        CharacterService::new(Arc::new(InMemoryCharacterRepository::default()))
    }

    #[tokio::test]
    async fn test_create_stores_normalized_draft() {
        let service = service();

        let character = service.create("user-1", &input("  Elara ", 3)).await.unwrap();

        assert_eq!(character.name, "Elara");
        assert_eq!(character.user_id, "user-1");
        assert_eq!(character.class.as_deref(), Some("srd_wizard"));
        assert_eq!(character.subclass, None);
        assert_eq!(character.level, 3);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft() {
        let service = service();

        let err = service.create("user-1", &input("Elara", 0)).await.unwrap_err();

        assert!(matches!(err, CharacterError::Validation(_)));
        assert!(service.list("user-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_scoped_and_newest_first() {
        let service = service();
        service.create("user-1", &input("First", 1)).await.unwrap();
        service.create("user-2", &input("Other", 1)).await.unwrap();
        service.create("user-1", &input("Second", 1)).await.unwrap();

        let names: Vec<String> = service
            .list("user-1")
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn test_other_users_character_is_not_found() {
        let service = service();
        let character = service.create("user-1", &input("Elara", 1)).await.unwrap();

        assert!(matches!(
            service.get("user-2", character.id).await,
            Err(CharacterError::NotFound(id)) if id == character.id
        ));
        assert!(matches!(
            service.update("user-2", character.id, &input("Stolen", 5)).await,
            Err(CharacterError::NotFound(_))
        ));
        assert!(matches!(
            service.delete("user-2", character.id).await,
            Err(CharacterError::NotFound(_))
        ));

        assert_eq!(service.get("user-1", character.id).await.unwrap().name, "Elara");
    }

    #[tokio::test]
    async fn test_update_then_delete() {
        let service = service();
        let character = service.create("user-1", &input("Elara", 1)).await.unwrap();

        let mut change = input("Elara the Wise", 5);
        change.subclass = Some("evocation".to_string());
        let updated = service.update("user-1", character.id, &change).await.unwrap();

        assert_eq!(updated.name, "Elara the Wise");
        assert_eq!(updated.subclass.as_deref(), Some("evocation"));
        assert!(updated.updated_at >= character.updated_at);
        assert_eq!(updated.created_at, character.created_at);

        service.delete("user-1", character.id).await.unwrap();
        assert!(matches!(
            service.get("user-1", character.id).await,
            Err(CharacterError::NotFound(_))
        ));
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;
    use crate::presentation::router::characters_router_generic;
    use auth::middleware::{GateState, session_gate};
    use auth::{GateConfig, JwtSessionVerifier, SessionClaims, SessionGate};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use chrono::Utc;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct TestApp {
        router: Router,
        verifier: JwtSessionVerifier,
    }

    impl TestApp {
        fn new() -> Self {
            let config = Arc::new(GateConfig::development());
            let verifier = JwtSessionVerifier::new(&config);
            let gate = Arc::new(SessionGate::new(Arc::new(verifier.clone()), config));

            let router = characters_router_generic(InMemoryCharacterRepository::default()).layer(
                axum::middleware::from_fn_with_state(
                    GateState::new(gate),
                    session_gate::<JwtSessionVerifier>,
                ),
            );

            Self { router, verifier }
        }

        fn cookie(&self, sub: &str) -> String {
            let claims = SessionClaims::new(sub, Utc::now().timestamp(), 3600);
            format!("sb-access-token={}", self.verifier.issue(&claims).unwrap())
        }

        async fn send(&self, method: &str, uri: &str, user: Option<&str>, body: Option<Value>) -> Response {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(user) = user {
                builder = builder.header(header::COOKIE, self.cookie(user));
            }
            let body = match body {
                Some(json) => {
                    builder = builder.header(header::CONTENT_TYPE, "application/json");
                    Body::from(json.to_string())
                }
                None => Body::empty(),
            };

            self.router
                .clone()
                .oneshot(builder.body(body).unwrap())
                .await
                .unwrap()
        }
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    }

    fn elara() -> Value {
        json!({
            "name": "Elara",
            "race": "srd_elf",
            "class": "srd_wizard",
            "subclass": "",
            "background": "srd_sage",
            "level": 2
        })
    }

    #[tokio::test]
    async fn test_anonymous_is_redirected_to_sign_in() {
        let app = TestApp::new();

        let response = app.send("GET", "/characters", None, None).await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/auth/login");
    }

    #[tokio::test]
    async fn test_create_returns_201_with_location() {
        let app = TestApp::new();

        let response = app.send("POST", "/characters", Some("user-1"), Some(elara())).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
        let body = json_body(response).await;

        assert_eq!(location, format!("/characters/{}", body["id"].as_str().unwrap()));
        assert_eq!(body["name"], "Elara");
        assert_eq!(body["subclass"], Value::Null);
        assert_eq!(body["userId"], "user-1");

        let listed = json_body(app.send("GET", "/characters", Some("user-1"), None).await).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_level_defaults_to_one() {
        let app = TestApp::new();

        let response = app
            .send("POST", "/characters", Some("user-1"), Some(json!({ "name": "Tor" })))
            .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(json_body(response).await["level"], 1);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_422_problem() {
        let app = TestApp::new();

        let response = app
            .send(
                "POST",
                "/characters",
                Some("user-1"),
                Some(json!({ "name": "Elara", "level": 21 })),
            )
            .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["status"], 422);
        assert!(body["detail"].as_str().unwrap().contains("level"));
    }

    #[tokio::test]
    async fn test_records_are_private_to_owner() {
        let app = TestApp::new();
        let created = json_body(app.send("POST", "/characters", Some("user-1"), Some(elara())).await).await;
        let uri = format!("/characters/{}", created["id"].as_str().unwrap());

        let response = app.send("GET", &uri, Some("user-2"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let listed = json_body(app.send("GET", "/characters", Some("user-2"), None).await).await;
        assert_eq!(listed, json!([]));

        let response = app.send("DELETE", &uri, Some("user-2"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let app = TestApp::new();
        let created = json_body(app.send("POST", "/characters", Some("user-1"), Some(elara())).await).await;
        let uri = format!("/characters/{}", created["id"].as_str().unwrap());

        let mut change = elara();
        change["level"] = json!(6);
        change["subclass"] = json!("evocation");
        let response = app.send("PUT", &uri, Some("user-1"), Some(change)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["level"], 6);
        assert_eq!(body["subclass"], "evocation");

        let response = app.send("DELETE", &uri, Some("user-1"), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.send("GET", &uri, Some("user-1"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected() {
        let app = TestApp::new();

        let response = app.send("GET", "/characters/42", Some("user-1"), None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
