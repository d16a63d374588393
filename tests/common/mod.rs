#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, NaiveDate, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use plantdesk::router::init_router;
use plantdesk::state::AppState;
use plantdesk_auth::{Role, create_access_token};
use plantdesk_config::{CorsConfig, JwtConfig};
use plantdesk_models::{
    Contractor, ContractorStatus, Document, DocumentCategory, Media, MediaKind, Metadata, Project,
    ProjectCategory, ProjectStatus, Setting, Trade,
};
use plantdesk_store::Store;

pub struct TestApp {
    pub state: AppState,
}

pub struct TestUser {
    pub id: Uuid,
    pub token: String,
}

impl TestApp {
    pub fn new() -> Self {
        let jwt_config = JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry: 3600,
        };
        Self {
            state: AppState::new(Store::new(), jwt_config, CorsConfig::default()),
        }
    }

    pub fn router(&self) -> Router {
        init_router(self.state.clone())
    }

    pub fn user(&self, role: Role) -> TestUser {
        let id = Uuid::new_v4();
        let email = format!("{}@campus.example.edu", role);
        let token = create_access_token(id, &email, role, &self.state.jwt_config).unwrap();
        TestUser { id, token }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request("GET", uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, Some(token), None).await
    }

    /// Inserts a project owned by `client_id`, created `age_minutes` ago.
    pub async fn insert_project(&self, client_id: Uuid, title: &str, age_minutes: i64) -> Project {
        let created_at = Utc::now() - Duration::minutes(age_minutes);
        let project = Project {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            status: ProjectStatus::Planning,
            category: ProjectCategory::Renovation,
            campus: "North".to_string(),
            building: Some("Science Hall".to_string()),
            is_emergency: false,
            budget_cents: 100_000,
            client_id,
            contractor_id: None,
            start_date: NaiveDate::from_ymd_opt(2024, 9, 1),
            end_date: None,
            metadata: Metadata::new(),
            created_at,
            updated_at: created_at,
        };
        self.state.store.projects.insert(project).await.unwrap()
    }

    pub async fn insert_contractor(&self, name: &str) -> Contractor {
        let now = Utc::now();
        let contractor = Contractor {
            id: Uuid::new_v4(),
            name: name.to_string(),
            trade: Trade::Electrical,
            status: ContractorStatus::Active,
            email: None,
            phone: None,
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        };
        self.state.store.contractors.insert(contractor).await.unwrap()
    }

    pub async fn insert_document(&self, project: &Project, title: &str) -> Document {
        let now = Utc::now();
        let document = Document {
            id: Uuid::new_v4(),
            project_id: project.id,
            owner_id: project.client_id,
            title: title.to_string(),
            category: DocumentCategory::Permit,
            url: "https://files.example.edu/permit.pdf".to_string(),
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        };
        self.state.store.documents.insert(document).await.unwrap()
    }

    pub async fn insert_media(&self, project: &Project, kind: MediaKind) -> Media {
        let now = Utc::now();
        let media = Media {
            id: Uuid::new_v4(),
            project_id: project.id,
            owner_id: project.client_id,
            kind,
            caption: None,
            url: "https://files.example.edu/site.jpg".to_string(),
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        };
        self.state.store.media.insert(media).await.unwrap()
    }

    pub async fn insert_setting(&self, key: &str, value: Value) -> Setting {
        let now = Utc::now();
        let setting = Setting {
            id: Uuid::new_v4(),
            key: key.to_string(),
            value,
            description: None,
            created_at: now,
            updated_at: now,
        };
        self.state.store.settings.insert(setting).await.unwrap()
    }
}
