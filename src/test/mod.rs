use std::sync::Arc;

use crate::api::error::SystemError;
use crate::modules::friend::model::UserPair;
use crate::modules::friend::repository::FriendshipRepository;
use crate::modules::friend::repository_pg::FriendRepositoryPg;
use crate::modules::friend::schema::RequestStatus;
use crate::modules::friend::service::FriendService;
use crate::modules::user::schema::UserEntity;

fn service(pool: sqlx::PgPool) -> FriendService<FriendRepositoryPg> {
    FriendService::with_dependencies(Arc::new(FriendRepositoryPg::new(pool)))
}

async fn seed_user(pool: &sqlx::PgPool, name: &str) -> UserEntity {
    sqlx::query_as::<_, UserEntity>("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING *")
        .bind(name)
        .bind(format!("{name}@example.com"))
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn count_requests(pool: &sqlx::PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM friend_requests").fetch_one(pool).await.unwrap()
}

#[sqlx::test]
async fn propose_creates_pending_request(pool: sqlx::PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let svc = service(pool);

    // bob initiates; the stored pair is still (alice, bob)
    let request = svc.send_friend_request(bob.id, alice.id).await.unwrap();

    assert!(request.user_lo < request.user_hi);
    assert_eq!((request.user_lo, request.user_hi), (alice.id, bob.id));
    assert_eq!(request.initiator_id, bob.id);
    assert_eq!(request.status, RequestStatus::Pending);
}

#[sqlx::test]
async fn duplicate_propose_conflicts_in_either_direction(pool: sqlx::PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let svc = service(pool.clone());

    svc.send_friend_request(alice.id, bob.id).await.unwrap();
    let err = svc.send_friend_request(bob.id, alice.id).await.unwrap_err();

    assert!(matches!(err, SystemError::Conflict(_)));
    assert_eq!(count_requests(&pool).await, 1);
}

#[sqlx::test]
async fn accept_promotes_request_to_friendship(pool: sqlx::PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let svc = service(pool.clone());

    svc.send_friend_request(alice.id, bob.id).await.unwrap();
    let status = svc.resolve_friend_request(alice.id, bob.id, "accept").await.unwrap();
    assert_eq!(status, RequestStatus::Accepted);

    let repo = FriendRepositoryPg::new(pool.clone());
    let pair = UserPair::new(alice.id, bob.id).unwrap();
    assert!(repo.find_friendship(&pair).await.unwrap().is_some());
    assert_eq!(count_requests(&pool).await, 0);
}

#[sqlx::test]
async fn reject_discards_request_without_friendship(pool: sqlx::PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let svc = service(pool.clone());

    svc.send_friend_request(alice.id, bob.id).await.unwrap();
    // the receiver resolves with the pair reversed
    let status = svc.resolve_friend_request(bob.id, alice.id, "reject").await.unwrap();
    assert_eq!(status, RequestStatus::Rejected);

    let repo = FriendRepositoryPg::new(pool.clone());
    let pair = UserPair::new(alice.id, bob.id).unwrap();
    assert!(repo.find_friendship(&pair).await.unwrap().is_none());
    assert_eq!(count_requests(&pool).await, 0);
}

#[sqlx::test]
async fn resolve_without_request_is_not_found(pool: sqlx::PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let svc = service(pool);

    let accept_err = svc.resolve_friend_request(alice.id, bob.id, "accept").await.unwrap_err();
    assert!(matches!(accept_err, SystemError::NotFound(_)));

    let reject_err = svc.resolve_friend_request(alice.id, bob.id, "reject").await.unwrap_err();
    assert!(matches!(reject_err, SystemError::NotFound(_)));
}

#[sqlx::test]
async fn self_request_is_rejected_as_bad_input(pool: sqlx::PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let svc = service(pool.clone());

    let err = svc.send_friend_request(alice.id, alice.id).await.unwrap_err();
    assert!(matches!(err, SystemError::BadRequest(_)));
    assert_eq!(count_requests(&pool).await, 0);
}

#[sqlx::test]
async fn unknown_action_is_rejected_and_keeps_request(pool: sqlx::PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let svc = service(pool.clone());

    svc.send_friend_request(alice.id, bob.id).await.unwrap();
    let err = svc.resolve_friend_request(alice.id, bob.id, "block").await.unwrap_err();

    assert!(matches!(err, SystemError::BadRequest(_)));
    assert_eq!(count_requests(&pool).await, 1);
}

#[sqlx::test]
async fn propose_between_friends_conflicts(pool: sqlx::PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let svc = service(pool);

    svc.send_friend_request(alice.id, bob.id).await.unwrap();
    svc.resolve_friend_request(alice.id, bob.id, "accept").await.unwrap();

    let err = svc.send_friend_request(bob.id, alice.id).await.unwrap_err();
    assert!(matches!(err, SystemError::Conflict(_)));
}

#[sqlx::test]
async fn concurrent_proposes_have_a_single_winner(pool: sqlx::PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let svc = service(pool.clone());

    let (first, second) = tokio::join!(
        svc.send_friend_request(alice.id, bob.id),
        svc.send_friend_request(bob.id, alice.id),
    );

    let successes = first.is_ok() as u8 + second.is_ok() as u8;
    assert_eq!(successes, 1);

    let loser = if first.is_err() { first.unwrap_err() } else { second.unwrap_err() };
    assert!(matches!(loser, SystemError::Conflict(_)));
    assert_eq!(count_requests(&pool).await, 1);
}
