use crate::api::error;
use crate::modules::friend::model::UserPair;
use crate::modules::friend::schema::{FriendRequestEntity, FriendshipEntity};

#[async_trait::async_trait]
pub trait FriendshipRepository {
    async fn find_friendship(
        &self,
        pair: &UserPair,
    ) -> Result<Option<FriendshipEntity>, error::SystemError>;
}

#[async_trait::async_trait]
pub trait FriendRequestRepository {
    /// Inserts a pending request for the pair. A duplicate pair surfaces as
    /// a unique violation, which the error layer reports as a conflict.
    async fn create_friend_request(
        &self,
        pair: &UserPair,
        initiator_id: i64,
    ) -> Result<FriendRequestEntity, error::SystemError>;

    /// Returns false when no request existed for the pair.
    async fn delete_friend_request(&self, pair: &UserPair) -> Result<bool, error::SystemError>;
}

#[async_trait::async_trait]
pub trait FriendRepo: FriendshipRepository + FriendRequestRepository + Send + Sync {
    /// Promotes the pending request for the pair into a friendship row and
    /// removes the request, as one transaction.
    async fn accept_friend_request_atomic(
        &self,
        pair: &UserPair,
    ) -> Result<FriendshipEntity, error::SystemError>;
}
