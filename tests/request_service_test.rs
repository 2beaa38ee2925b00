mod common;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use common::{new_listing, register, test_pool};
use voisins_core::models::{
    Category, NewRequest, RequestDecision, RequestStatus, ServiceType,
};
use voisins_core::services::{ListingService, RequestService};
use voisins_core::CoreError;

async fn listing_owned_by(pool: &sqlx::SqlitePool, owner: i64) -> i64 {
    ListingService::new(pool.clone())
        .create(
            owner,
            new_listing("Tondeuse", Category::Gardening, ServiceType::Exchange, None),
        )
        .await
        .unwrap()
}

fn booking(listing_id: i64, message: &str) -> NewRequest {
    NewRequest {
        listing_id,
        desired_date: "samedi prochain".to_string(),
        message: message.to_string(),
    }
}

#[tokio::test]
async fn a_new_request_starts_pending_and_shows_up_on_both_sides() {
    let pool = test_pool().await;
    let requests = RequestService::new(pool.clone());
    let owner = register(&pool, "jean@example.com", Some("0612345678")).await;
    let requester = register(&pool, "marie@example.com", Some("0698765432")).await;
    let listing = listing_owned_by(&pool, owner).await;

    let id = requests
        .create(requester, booking(listing, "Je peux l'emprunter ?"))
        .await
        .unwrap();

    let received = requests.received_for(owner).await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].id, id);
    assert_eq!(received[0].status, RequestStatus::Pending);
    assert_eq!(received[0].listing_title, "Tondeuse");
    // The owner sees the requester's contact details.
    assert_eq!(received[0].contact_email, "marie@example.com");
    assert_eq!(received[0].contact_phone.as_deref(), Some("0698765432"));

    let sent = requests.sent_by(requester).await.unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].status, RequestStatus::Pending);
    // The requester sees the owner's contact details.
    assert_eq!(sent[0].contact_email, "jean@example.com");
    assert_eq!(sent[0].contact_phone.as_deref(), Some("0612345678"));
}

#[tokio::test]
async fn accepting_a_request_is_reflected_in_both_views() {
    let pool = test_pool().await;
    let requests = RequestService::new(pool.clone());
    let owner = register(&pool, "jean@example.com", None).await;
    let requester = register(&pool, "marie@example.com", None).await;
    let listing = listing_owned_by(&pool, owner).await;

    let id = requests
        .create(requester, booking(listing, "Je peux l'emprunter ?"))
        .await
        .unwrap();
    requests.decide(owner, id, RequestDecision::Accept).await.unwrap();

    let received = requests.received_for(owner).await.unwrap();
    assert_eq!(received[0].status, RequestStatus::Accepted);

    let sent = requests.sent_by(requester).await.unwrap();
    assert_eq!(sent[0].status, RequestStatus::Accepted);
}

#[tokio::test]
async fn declining_a_request_is_terminal_too() {
    let pool = test_pool().await;
    let requests = RequestService::new(pool.clone());
    let owner = register(&pool, "jean@example.com", None).await;
    let requester = register(&pool, "marie@example.com", None).await;
    let listing = listing_owned_by(&pool, owner).await;

    let id = requests
        .create(requester, booking(listing, "Disponible ?"))
        .await
        .unwrap();
    requests.decide(owner, id, RequestDecision::Decline).await.unwrap();

    let err = requests
        .decide(owner, id, RequestDecision::Accept)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::InvalidTransition);

    let sent = requests.sent_by(requester).await.unwrap();
    assert_eq!(sent[0].status, RequestStatus::Declined);
}

#[tokio::test]
async fn an_already_accepted_request_cannot_be_redecided() {
    let pool = test_pool().await;
    let requests = RequestService::new(pool.clone());
    let owner = register(&pool, "jean@example.com", None).await;
    let requester = register(&pool, "marie@example.com", None).await;
    let listing = listing_owned_by(&pool, owner).await;

    let id = requests
        .create(requester, booking(listing, "Disponible ?"))
        .await
        .unwrap();
    requests.decide(owner, id, RequestDecision::Accept).await.unwrap();

    let err = requests
        .decide(owner, id, RequestDecision::Decline)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::InvalidTransition);
}

#[tokio::test]
async fn only_the_listing_owner_decides() {
    let pool = test_pool().await;
    let requests = RequestService::new(pool.clone());
    let owner = register(&pool, "jean@example.com", None).await;
    let requester = register(&pool, "marie@example.com", None).await;
    let listing = listing_owned_by(&pool, owner).await;

    let id = requests
        .create(requester, booking(listing, "Disponible ?"))
        .await
        .unwrap();

    // Not even the requester may settle their own request.
    let err = requests
        .decide(requester, id, RequestDecision::Accept)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::NotOwner);

    let err = requests
        .decide(owner, 4242, RequestDecision::Accept)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::RequestNotFound);
}

#[tokio::test]
async fn requesting_a_missing_listing_fails() {
    let pool = test_pool().await;
    let requests = RequestService::new(pool.clone());
    let requester = register(&pool, "marie@example.com", None).await;

    let err = requests
        .create(requester, booking(4242, "Disponible ?"))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::ListingNotFound);
}

#[tokio::test]
async fn duplicate_and_self_requests_are_allowed() {
    let pool = test_pool().await;
    let requests = RequestService::new(pool.clone());
    let owner = register(&pool, "jean@example.com", None).await;
    let requester = register(&pool, "marie@example.com", None).await;
    let listing = listing_owned_by(&pool, owner).await;

    requests
        .create(requester, booking(listing, "Une première fois"))
        .await
        .unwrap();
    requests
        .create(requester, booking(listing, "Une deuxième fois"))
        .await
        .unwrap();
    requests
        .create(owner, booking(listing, "Ma propre annonce"))
        .await
        .unwrap();

    assert_eq!(requests.received_for(owner).await.unwrap().len(), 3);
    assert_eq!(requests.sent_by(requester).await.unwrap().len(), 2);
}

#[tokio::test]
async fn received_requests_come_newest_first() {
    let pool = test_pool().await;
    let requests = RequestService::new(pool.clone());
    let owner = register(&pool, "jean@example.com", None).await;
    let requester = register(&pool, "marie@example.com", None).await;
    let listing = listing_owned_by(&pool, owner).await;

    let first = requests
        .create(requester, booking(listing, "Première demande"))
        .await
        .unwrap();
    let second = requests
        .create(requester, booking(listing, "Deuxième demande"))
        .await
        .unwrap();

    let received = requests.received_for(owner).await.unwrap();
    assert_eq!(
        received.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![second, first]
    );
}
