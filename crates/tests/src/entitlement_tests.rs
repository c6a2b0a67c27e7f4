use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use shared_types::{PlanType, RoleName, SubscriptionStatus};

use crate::common::{get_json, test_app};

#[tokio::test]
async fn church_subscription_shadows_personal() {
    // Active church_plus via the church, active individual personally:
    // the church entitlement must win outright.
    let (app, store) = test_app();

    let church_plan = store.add_plan(PlanType::ChurchPlus, Some(300), Some(8));
    let church_sub = store.add_subscription(SubscriptionStatus::Active, None, church_plan);
    let church = store.add_church("grace-chapel", "Grace Chapel", Some(church_sub));

    let personal_plan = store.add_plan(PlanType::Individual, None, None);
    let personal_sub = store.add_subscription(SubscriptionStatus::Active, None, personal_plan);

    store.add_profile(5, Some(church), Some(personal_sub));

    let (status, body) = get_json(&app, "/api/users/5/entitlement").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan_type"], "church_plus");
    assert_eq!(body["active"], true);
    assert_eq!(body["can_access_groups"], true);
    assert_eq!(body["can_access_church_admin"], true);
    assert_eq!(body["can_access_church_customization"], true);
    assert_eq!(body["max_members"], 300);
    assert_eq!(body["max_admins"], 8);
}

#[tokio::test]
async fn admin_of_premium_church_gets_customization() {
    // End-to-end scenario: admin of "grace-chapel", church on church_premium.
    let (app, store) = test_app();

    let plan = store.add_plan(PlanType::ChurchPremium, None, None);
    let sub = store.add_subscription(SubscriptionStatus::Active, None, plan);
    let church = store.add_church("grace-chapel", "Grace Chapel", Some(sub));
    store.add_role(7, RoleName::Admin, Some(church));
    store.add_profile(7, Some(church), None);

    let (status, body) = get_json(&app, "/api/users/7/can-manage/grace-chapel").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["can_manage"], true);

    let (status, body) = get_json(&app, "/api/users/7/entitlement").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan_type"], "church_premium");
    assert_eq!(body["can_access_church_customization"], true);
}

#[tokio::test]
async fn personal_individual_has_no_group_features() {
    // End-to-end scenario: personal individual plan, no church.
    let (app, store) = test_app();

    let plan = store.add_plan(PlanType::Individual, None, None);
    let sub = store.add_subscription(SubscriptionStatus::Active, None, plan);
    store.add_profile(3, None, Some(sub));

    let (status, body) = get_json(&app, "/api/users/3/entitlement").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan_type"], "individual");
    assert_eq!(body["can_access_tracks"], true);
    assert_eq!(body["can_access_groups"], false);
    assert_eq!(body["can_access_church_admin"], false);
}

#[tokio::test]
async fn every_broken_chain_yields_the_same_default() {
    let (app, store) = test_app();

    // No profile at all.
    let (_, no_profile) = get_json(&app, "/api/users/20/entitlement").await;

    // Profile without any subscription reference.
    store.add_profile(21, None, None);
    let (_, no_subscription) = get_json(&app, "/api/users/21/entitlement").await;

    // Personal subscription present but canceled.
    let plan = store.add_plan(PlanType::Individual, None, None);
    let canceled = store.add_subscription(SubscriptionStatus::Canceled, None, plan);
    store.add_profile(22, None, Some(canceled));
    let (_, inactive) = get_json(&app, "/api/users/22/entitlement").await;

    assert_eq!(no_profile, no_subscription);
    assert_eq!(no_subscription, inactive);
    assert_eq!(no_profile["plan_type"], "free");
    assert_eq!(no_profile["active"], false);
    assert_eq!(no_profile["can_access_public_content"], true);
}

#[tokio::test]
async fn entitlement_is_idempotent() {
    let (app, store) = test_app();

    let plan = store.add_plan(PlanType::ChurchSimple, Some(120), Some(4));
    let sub = store.add_subscription(SubscriptionStatus::Active, None, plan);
    let church = store.add_church("hope-fellowship", "Hope Fellowship", Some(sub));
    store.add_profile(4, Some(church), None);

    let (_, first) = get_json(&app, "/api/users/4/entitlement").await;
    let (_, second) = get_json(&app, "/api/users/4/entitlement").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn status_not_expiry_gates_activity() {
    // An expired timestamp on an active subscription still entitles:
    // only the status field is consulted.
    let (app, store) = test_app();

    let expired = Utc::now() - Duration::days(90);
    let plan = store.add_plan(PlanType::Individual, None, None);
    let sub = store.add_subscription(SubscriptionStatus::Active, Some(expired), plan);
    store.add_profile(6, None, Some(sub));

    let (status, body) = get_json(&app, "/api/users/6/entitlement").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], true);
    assert_eq!(body["can_access_tracks"], true);
}

#[tokio::test]
async fn inactive_church_subscription_falls_back_to_personal() {
    let (app, store) = test_app();

    let church_plan = store.add_plan(PlanType::ChurchPremium, None, None);
    let church_sub = store.add_subscription(SubscriptionStatus::PastDue, None, church_plan);
    let church = store.add_church("grace-chapel", "Grace Chapel", Some(church_sub));

    let personal_plan = store.add_plan(PlanType::Individual, None, None);
    let personal_sub = store.add_subscription(SubscriptionStatus::Active, None, personal_plan);

    store.add_profile(8, Some(church), Some(personal_sub));

    let (_, body) = get_json(&app, "/api/users/8/entitlement").await;
    assert_eq!(body["plan_type"], "individual");
    assert_eq!(body["can_access_groups"], false);
}
