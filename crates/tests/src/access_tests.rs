use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::RoleName;

use crate::common::{get_json, test_app};

#[tokio::test]
async fn plain_user_has_no_access_anywhere() {
    // End-to-end scenario: no role assignments, no subscriptions.
    let (app, store) = test_app();
    store.add_church("grace-chapel", "Grace Chapel", None);

    let (status, body) = get_json(&app, "/api/users/1/super-admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "super_admin": false }));

    let (status, body) = get_json(&app, "/api/users/1/can-manage/grace-chapel").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "can_manage": false }));

    let (status, body) = get_json(&app, "/api/users/1/entitlement").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan_type"], "free");
    assert_eq!(body["active"], false);
    assert_eq!(body["can_access_public_content"], true);
    assert_eq!(body["can_access_tracks"], false);
}

#[tokio::test]
async fn super_admin_flag_round_trips() {
    let (app, store) = test_app();
    store.add_role(9, RoleName::SuperAdmin, None);

    let (status, body) = get_json(&app, "/api/users/9/super-admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "super_admin": true }));
}

#[tokio::test]
async fn super_admin_manages_nonexistent_church() {
    // The super-admin check short-circuits before tenant resolution.
    let (app, store) = test_app();
    store.add_role(9, RoleName::SuperAdmin, None);

    let (status, body) = get_json(&app, "/api/users/9/can-manage/no-such-church").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "can_manage": true }));
}

#[tokio::test]
async fn church_admin_manages_own_church_by_slug_and_id() {
    let (app, store) = test_app();
    let own = store.add_church("grace-chapel", "Grace Chapel", None);
    store.add_church("hope-fellowship", "Hope Fellowship", None);
    store.add_role(2, RoleName::Admin, Some(own));

    let (status, body) = get_json(&app, "/api/users/2/can-manage/grace-chapel").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "can_manage": true }));

    let uri = format!("/api/users/2/can-manage/{}", own);
    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "can_manage": true }));

    let (status, body) = get_json(&app, "/api/users/2/can-manage/hope-fellowship").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "can_manage": false }));

    // No platform-wide rights either.
    let (_, body) = get_json(&app, "/api/users/2/super-admin").await;
    assert_eq!(body, json!({ "super_admin": false }));
}

#[tokio::test]
async fn unknown_church_is_denied_not_an_error() {
    let (app, store) = test_app();
    let own = store.add_church("grace-chapel", "Grace Chapel", None);
    store.add_role(2, RoleName::Admin, Some(own));

    let (status, body) = get_json(&app, "/api/users/2/can-manage/ghost-parish").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "can_manage": false }));
}

#[tokio::test]
async fn store_failure_is_a_server_error_not_a_denial() {
    let (app, store) = test_app();
    store.set_failing(true);

    let (status, body) = get_json(&app, "/api/users/1/super-admin").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "DatabaseError");

    let (status, _) = get_json(&app, "/api/users/1/can-manage/grace-chapel").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = get_json(&app, "/api/users/1/entitlement").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_reports_store_connectivity() {
    let (app, store) = test_app();

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "connected");

    store.set_failing(true);
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["store"].as_str().unwrap().starts_with("error"));
}
