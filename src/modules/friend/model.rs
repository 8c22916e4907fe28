use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::error;
use crate::modules::friend::schema::RequestStatus;

/// Unordered pair of user IDs in canonical order, `lo < hi`.
///
/// Both `friend_requests` and `friendships` store one row per unordered
/// pair, so normalizing at construction makes the lookup a single equality
/// query and lets the pair-unique index carry the duplicate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserPair {
    lo: i64,
    hi: i64,
}

impl UserPair {
    pub fn new(a: i64, b: i64) -> Result<Self, error::SystemError> {
        if a == b {
            return Err(error::SystemError::bad_request(
                "Sender and receiver must be different users",
            ));
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        Ok(UserPair { lo, hi })
    }

    pub fn lo(&self) -> i64 {
        self.lo
    }

    pub fn hi(&self) -> i64 {
        self.hi
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    Accept,
    Reject,
}

impl RequestAction {
    pub fn parse(action: &str) -> Result<Self, error::SystemError> {
        match action {
            "accept" => Ok(RequestAction::Accept),
            "reject" => Ok(RequestAction::Reject),
            _ => Err(error::SystemError::bad_request("Unknown action")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestBody {
    #[validate(range(min = 1, message = "Sender id must be a positive integer"))]
    pub sender_id: i64,
    #[validate(range(min = 1, message = "Receiver id must be a positive integer"))]
    pub receiver_id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestActionBody {
    #[validate(range(min = 1, message = "Sender id must be a positive integer"))]
    pub sender_id: i64,
    #[validate(range(min = 1, message = "Receiver id must be a positive integer"))]
    pub receiver_id: i64,
    #[validate(length(min = 1, message = "Action cannot be empty"))]
    pub action: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveResponse {
    pub status: RequestStatus,
}
