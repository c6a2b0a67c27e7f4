use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{AppError, RoleAssignment, RoleName, UserId};

/// Row from role_assignments.
#[derive(sqlx::FromRow)]
struct RoleAssignmentRow {
    role: String,
    church_id: Option<Uuid>,
}

/// Fetch every role assignment held by a user.
pub async fn role_assignments(
    pool: &Pool<Postgres>,
    user_id: UserId,
) -> Result<Vec<RoleAssignment>, AppError> {
    let rows = sqlx::query_as::<_, RoleAssignmentRow>(
        "SELECT role, church_id FROM role_assignments WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::database(format!("role assignment query: {}", e)))?;

    Ok(rows
        .into_iter()
        .map(|r| RoleAssignment {
            role: RoleName::from_str_or_default(&r.role),
            church_id: r.church_id,
        })
        .collect())
}
