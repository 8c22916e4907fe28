use actix_web::{post, web};

use crate::{
    api::{error, success},
    modules::friend::{
        model::{FriendRequestActionBody, FriendRequestBody, ResolveResponse},
        repository_pg::FriendRepositoryPg,
        schema::{FriendRequestEntity, RequestStatus},
        service::FriendService,
    },
    utils::ValidatedJson,
};

pub type FriendSvc = FriendService<FriendRepositoryPg>;

#[post("/requests")]
pub async fn send_friend_request(
    friend_service: web::Data<FriendSvc>,
    body: ValidatedJson<FriendRequestBody>,
) -> Result<success::Success<FriendRequestEntity>, error::Error> {
    let request =
        friend_service.send_friend_request(body.0.sender_id, body.0.receiver_id).await?;

    Ok(success::Success::created(Some(request)).message("Friend request sent successfully"))
}

#[post("/requests/resolve")]
pub async fn resolve_friend_request(
    friend_service: web::Data<FriendSvc>,
    body: ValidatedJson<FriendRequestActionBody>,
) -> Result<success::Success<ResolveResponse>, error::Error> {
    let status = friend_service
        .resolve_friend_request(body.0.sender_id, body.0.receiver_id, &body.0.action)
        .await?;

    let message = if status == RequestStatus::Accepted {
        "Friend request accepted"
    } else {
        "Friend request rejected"
    };

    Ok(success::Success::ok(Some(ResolveResponse { status })).message(message))
}
