use sqlx::prelude::FromRow;

/// Users are provisioned outside this service and referenced by ID only.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
