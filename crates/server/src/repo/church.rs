use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{AppError, Church, ChurchId, UserId, UserProfile};

/// Row from churches.
#[derive(sqlx::FromRow)]
struct ChurchRow {
    id: Uuid,
    slug: String,
    name: String,
    subscription_id: Option<Uuid>,
}

impl From<ChurchRow> for Church {
    fn from(row: ChurchRow) -> Self {
        Church {
            id: row.id,
            slug: row.slug,
            name: row.name,
            subscription_id: row.subscription_id,
        }
    }
}

/// Look up a church by slug. The comparison is exact, as stored — slugs
/// are written lowercase by the registration flow and never rewritten here.
pub async fn church_by_slug(
    pool: &Pool<Postgres>,
    slug: &str,
) -> Result<Option<Church>, AppError> {
    let row = sqlx::query_as::<_, ChurchRow>(
        "SELECT id, slug, name, subscription_id FROM churches WHERE slug = $1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::database(format!("church slug query: {}", e)))?;

    Ok(row.map(Church::from))
}

pub async fn church_by_id(
    pool: &Pool<Postgres>,
    id: ChurchId,
) -> Result<Option<Church>, AppError> {
    let row = sqlx::query_as::<_, ChurchRow>(
        "SELECT id, slug, name, subscription_id FROM churches WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::database(format!("church id query: {}", e)))?;

    Ok(row.map(Church::from))
}

/// Row from user_profiles.
#[derive(sqlx::FromRow)]
struct UserProfileRow {
    user_id: i64,
    church_id: Option<Uuid>,
    subscription_id: Option<Uuid>,
}

pub async fn user_profile(
    pool: &Pool<Postgres>,
    user_id: UserId,
) -> Result<Option<UserProfile>, AppError> {
    let row = sqlx::query_as::<_, UserProfileRow>(
        "SELECT user_id, church_id, subscription_id FROM user_profiles WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::database(format!("profile query: {}", e)))?;

    Ok(row.map(|r| UserProfile {
        user_id: r.user_id,
        church_id: r.church_id,
        subscription_id: r.subscription_id,
    }))
}
