mod common;

use axum::http::StatusCode;
use common::TestApp;
use plantdesk_auth::Role;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_client_cannot_list_contractors() {
    let app = TestApp::new();
    let client = app.user(Role::Client);
    app.insert_contractor("Spark Electric").await;

    let (status, body) = app.get("/api/contractors", &client.token).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "authorization");
}

#[tokio::test]
async fn test_list_contractors_filtered_by_name() {
    let app = TestApp::new();
    let manager = app.user(Role::Manager);
    app.insert_contractor("Spark Electric").await;
    app.insert_contractor("Sparkle Cleaning").await;
    app.insert_contractor("Summit Roofing").await;

    let (status, body) = app
        .get("/api/contractors?name=SPARK&sort=name&order=asc", &manager.token)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 2);
    assert_eq!(body["data"][0]["name"], "Spark Electric");
    assert_eq!(body["data"][1]["name"], "Sparkle Cleaning");
}

#[tokio::test]
async fn test_contractor_sort_whitelist() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin);

    let (status, body) = app.get("/api/contractors?sort=budget", &admin.token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "sort");
}

#[tokio::test]
async fn test_create_contractor() {
    let app = TestApp::new();
    let manager = app.user(Role::Manager);

    let (status, body) = app
        .post(
            "/api/contractors",
            &manager.token,
            json!({
                "name": "Blue Pipe Plumbing",
                "trade": "plumbing",
                "email": "office@bluepipe.example.com"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Blue Pipe Plumbing");
    assert_eq!(body["status"], "active");
    assert_eq!(app.state.store.contractors.len().await, 1);
}

#[tokio::test]
async fn test_create_contractor_invalid_email() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin);

    let (status, body) = app
        .post(
            "/api/contractors",
            &admin.token,
            json!({
                "name": "Blue Pipe Plumbing",
                "trade": "plumbing",
                "email": "not-an-email"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "email");
}

#[tokio::test]
async fn test_create_contractor_missing_field() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin);

    let (status, body) = app
        .post("/api/contractors", &admin.token, json!({ "name": "No trade" }))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "trade");
}

#[tokio::test]
async fn test_update_contractor_status() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin);
    let contractor = app.insert_contractor("Summit Roofing").await;

    let (status, body) = app
        .put(
            &format!("/api/contractors/{}", contractor.id),
            &admin.token,
            json!({ "status": "suspended" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "suspended");
    assert_eq!(body["name"], "Summit Roofing");
}

#[tokio::test]
async fn test_get_missing_contractor() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin);

    let (status, _) = app
        .get(&format!("/api/contractors/{}", Uuid::new_v4()), &admin.token)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_assigned_contractor_conflicts() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin);
    let contractor = app.insert_contractor("Spark Electric").await;
    let project = app.insert_project(Uuid::new_v4(), "Rewire", 0).await;

    app.state
        .store
        .projects
        .update(project.id, |mut p| -> Result<_, ()> {
            p.contractor_id = Some(contractor.id);
            Ok(p)
        })
        .await
        .unwrap();

    let (status, body) = app
        .delete(&format!("/api/contractors/{}", contractor.id), &admin.token)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "conflict");

    app.delete(&format!("/api/projects/{}", project.id), &admin.token)
        .await;
    let (status, _) = app
        .delete(&format!("/api/contractors/{}", contractor.id), &admin.token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_client_forbidden_for_any_contractor_id() {
    let app = TestApp::new();
    let client = app.user(Role::Client);
    let existing = app.insert_contractor("Spark Electric").await;

    for id in [existing.id, Uuid::new_v4()] {
        let (status, _) = app
            .get(&format!("/api/contractors/{}", id), &client.token)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = app
            .delete(&format!("/api/contractors/{}", id), &client.token)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
    assert_eq!(app.state.store.contractors.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_assign_racing_contractor_delete_stays_consistent() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin);

    for round in 0..25 {
        let contractor = app.insert_contractor(&format!("Crew {}", round)).await;
        let project = app.insert_project(Uuid::new_v4(), "Rewire", 0).await;
        let project_uri = format!("/api/projects/{}", project.id);
        let contractor_uri = format!("/api/contractors/{}", contractor.id);

        let ((assign_status, _), (delete_status, _)) = tokio::join!(
            app.put(&project_uri, &admin.token, json!({ "contractor_id": contractor.id })),
            app.delete(&contractor_uri, &admin.token),
        );

        let assigned = assign_status == StatusCode::OK;
        let deleted = delete_status == StatusCode::NO_CONTENT;
        assert!(assigned != deleted, "round {round}: {assign_status} / {delete_status}");

        let stored = app.state.store.projects.get(project.id).await.unwrap();
        let exists = app.state.store.contractors.get(contractor.id).await.is_some();
        assert_eq!(stored.contractor_id.is_some(), exists);
    }
}
