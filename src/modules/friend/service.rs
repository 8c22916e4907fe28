use std::sync::Arc;

use crate::{
    api::error,
    modules::friend::{
        model::{RequestAction, UserPair},
        repository::FriendRepo,
        schema::{FriendRequestEntity, RequestStatus},
    },
};

#[derive(Clone)]
pub struct FriendService<R>
where
    R: FriendRepo + Send + Sync,
{
    friend_repo: Arc<R>,
}

impl<R> FriendService<R>
where
    R: FriendRepo + Send + Sync,
{
    pub fn with_dependencies(friend_repo: Arc<R>) -> Self {
        FriendService { friend_repo }
    }

    pub async fn send_friend_request(
        &self,
        sender_id: i64,
        receiver_id: i64,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        let pair = UserPair::new(sender_id, receiver_id)?;

        if self.friend_repo.find_friendship(&pair).await?.is_some() {
            return Err(error::SystemError::conflict("Users are already friends"));
        }

        // No existence pre-check for the request row; the unique index on
        // (user_lo, user_hi) arbitrates between concurrent proposers.
        self.friend_repo.create_friend_request(&pair, sender_id).await
    }

    pub async fn resolve_friend_request(
        &self,
        sender_id: i64,
        receiver_id: i64,
        action: &str,
    ) -> Result<RequestStatus, error::SystemError> {
        let pair = UserPair::new(sender_id, receiver_id)?;

        match RequestAction::parse(action)? {
            RequestAction::Accept => {
                self.friend_repo.accept_friend_request_atomic(&pair).await?;
                Ok(RequestStatus::Accepted)
            }
            RequestAction::Reject => {
                if !self.friend_repo.delete_friend_request(&pair).await? {
                    return Err(error::SystemError::not_found("Friend request not found"));
                }
                Ok(RequestStatus::Rejected)
            }
        }
    }
}
