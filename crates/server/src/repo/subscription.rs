use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{
    AppError, Plan, PlanId, PlanType, Subscription, SubscriptionId, SubscriptionStatus,
};

/// Row from subscriptions.
#[derive(sqlx::FromRow)]
struct SubscriptionRow {
    id: Uuid,
    status: String,
    expires_at: Option<DateTime<Utc>>,
    plan_id: Uuid,
}

pub async fn subscription(
    pool: &Pool<Postgres>,
    id: SubscriptionId,
) -> Result<Option<Subscription>, AppError> {
    let row = sqlx::query_as::<_, SubscriptionRow>(
        "SELECT id, status, expires_at, plan_id FROM subscriptions WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::database(format!("subscription query: {}", e)))?;

    Ok(row.map(|r| Subscription {
        id: r.id,
        status: SubscriptionStatus::from_str_or_default(&r.status),
        expires_at: r.expires_at,
        plan_id: r.plan_id,
    }))
}

/// Row from plans.
#[derive(sqlx::FromRow)]
struct PlanRow {
    id: Uuid,
    plan_type: String,
    max_members: Option<i32>,
    max_admins: Option<i32>,
}

pub async fn plan(pool: &Pool<Postgres>, id: PlanId) -> Result<Option<Plan>, AppError> {
    let row = sqlx::query_as::<_, PlanRow>(
        "SELECT id, plan_type, max_members, max_admins FROM plans WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::database(format!("plan query: {}", e)))?;

    Ok(row.map(|r| Plan {
        id: r.id,
        plan_type: PlanType::from_str_or_default(&r.plan_type),
        max_members: r.max_members,
        max_admins: r.max_admins,
    }))
}
