use crate::{
    api::error,
    modules::friend::{
        model::UserPair,
        repository::{FriendRepo, FriendRequestRepository, FriendshipRepository},
        schema::{FriendRequestEntity, FriendshipEntity},
    },
};

#[derive(Clone)]
pub struct FriendRepositoryPg {
    pool: sqlx::PgPool,
}

impl FriendRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FriendshipRepository for FriendRepositoryPg {
    async fn find_friendship(
        &self,
        pair: &UserPair,
    ) -> Result<Option<FriendshipEntity>, error::SystemError> {
        let friendship = sqlx::query_as::<_, FriendshipEntity>(
            "SELECT * FROM friendships WHERE user_lo = $1 AND user_hi = $2",
        )
        .bind(pair.lo())
        .bind(pair.hi())
        .fetch_optional(&self.pool)
        .await?;

        Ok(friendship)
    }
}

#[async_trait::async_trait]
impl FriendRequestRepository for FriendRepositoryPg {
    async fn create_friend_request(
        &self,
        pair: &UserPair,
        initiator_id: i64,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        let request = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            INSERT INTO friend_requests (user_lo, user_hi, initiator_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(pair.lo())
        .bind(pair.hi())
        .bind(initiator_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    async fn delete_friend_request(
        &self,
        pair: &UserPair,
    ) -> Result<bool, error::SystemError> {
        let result =
            sqlx::query("DELETE FROM friend_requests WHERE user_lo = $1 AND user_hi = $2")
                .bind(pair.lo())
                .bind(pair.hi())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait::async_trait]
impl FriendRepo for FriendRepositoryPg {
    async fn accept_friend_request_atomic(
        &self,
        pair: &UserPair,
    ) -> Result<FriendshipEntity, error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let request = sqlx::query_as::<_, FriendRequestEntity>(
            "SELECT * FROM friend_requests WHERE user_lo = $1 AND user_hi = $2 FOR UPDATE",
        )
        .bind(pair.lo())
        .bind(pair.hi())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| error::SystemError::not_found("Friend request not found"))?;

        let friendship = sqlx::query_as::<_, FriendshipEntity>(
            r#"
            INSERT INTO friendships (user_lo, user_hi)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(request.user_lo)
        .bind(request.user_hi)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM friend_requests WHERE id = $1")
            .bind(request.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(friendship)
    }
}
