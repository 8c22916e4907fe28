use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Type, Serialize, Deserialize)]
#[sqlx(type_name = "request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

/// Pending proposal row. `user_lo`/`user_hi` hold the normalized pair;
/// `initiator_id` records which of the two actually sent the request.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FriendRequestEntity {
    pub id: i64,
    pub user_lo: i64,
    pub user_hi: i64,
    pub initiator_id: i64,
    pub status: RequestStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FriendshipEntity {
    pub id: i64,
    pub user_lo: i64,
    pub user_hi: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
