//! Resolver shaping rules, driven by `MockService` so every branch and error
//! path can be reached without a store.

use std::sync::{Arc, Mutex};

use tracing::Span;
use user_accounts::mock::MockService;
use user_accounts::model::{Address, Card, EntityKind, Health, User};
use user_accounts::resolver::{
    AddressPostRequest, Collection, DeleteRequest, GetRequest, LoginRequest, RegisterRequest,
    Request, Resolver, Response, SpanSource, StatusResponse, UserResponse,
};
use user_accounts::service::ServiceError;
use user_accounts::store::StoreError;

fn user(id: &str, username: &str) -> User {
    User {
        id: id.to_string(),
        ..User::new(username, format!("{username}@example.com"), "First", "Last")
    }
}

fn address(id: &str, street: &str) -> Address {
    Address {
        id: id.to_string(),
        street: street.to_string(),
        ..Address::default()
    }
}

fn card(id: &str, long_num: &str) -> Card {
    Card {
        id: id.to_string(),
        long_num: long_num.to_string(),
        ..Card::default()
    }
}

fn store_down() -> ServiceError {
    ServiceError::Store(StoreError::Unavailable("customers: Actor closed".into()))
}

/// Records span names instead of emitting them.
#[derive(Default)]
struct RecordingSpans {
    names: Mutex<Vec<&'static str>>,
}

impl SpanSource for RecordingSpans {
    fn span(&self, name: &'static str) -> Span {
        self.names.lock().unwrap().push(name);
        Span::none()
    }
}

// =============================================================================
// User read path
// =============================================================================

#[tokio::test]
async fn test_empty_id_returns_full_collection() {
    let mut mock = MockService::new();
    mock.expect_get_users("").return_ok(vec![
        user("u1", "ann"),
        user("u2", "bob"),
        user("u3", "cy"),
    ]);
    let resolver = Resolver::new(mock);

    let resolved = resolver.get_users(GetRequest::all()).await;

    assert!(resolved.is_ok());
    match resolved.response.embedded() {
        Some(Collection::Users(users)) => {
            let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
            assert_eq!(names, vec!["ann", "bob", "cy"]);
        }
        other => panic!("expected user envelope, got {other:?}"),
    }
    resolver.service().verify();
}

#[tokio::test]
async fn test_empty_id_with_no_users_is_still_an_envelope() {
    let mut mock = MockService::new();
    mock.expect_get_users("").return_ok(vec![]);
    let resolver = Resolver::new(mock);

    // The selector is ignored for collection requests.
    let resolved = resolver.get_users(GetRequest::nested("", "cards")).await;

    assert_eq!(resolved.response.embedded(), Some(&Collection::Users(vec![])));
    assert!(resolved.is_ok());
    resolver.service().verify();
}

#[tokio::test]
async fn test_unknown_user_is_zero_value_without_hydration() {
    let mut mock = MockService::new();
    mock.expect_get_users("ghost").return_ok(vec![]);
    let resolver = Resolver::new(mock);

    let resolved = resolver.get_users(GetRequest::one("ghost")).await;

    assert_eq!(resolved.response, Response::User(User::default()));
    assert!(resolved.error.is_none());
    resolver.service().verify();
}

#[tokio::test]
async fn test_unknown_user_nested_request_is_empty_envelope() {
    let mut mock = MockService::new();
    mock.expect_get_users("ghost").return_ok(vec![]);
    mock.expect_get_users("ghost").return_ok(vec![]);
    let resolver = Resolver::new(mock);

    let addresses = resolver
        .get_users(GetRequest::nested("ghost", "addresses"))
        .await;
    assert_eq!(
        addresses.response.embedded(),
        Some(&Collection::Addresses(vec![]))
    );
    assert!(addresses.is_ok());

    let cards = resolver.get_users(GetRequest::nested("ghost", "cards")).await;
    assert_eq!(cards.response.embedded(), Some(&Collection::Cards(vec![])));
    assert!(cards.is_ok());

    resolver.service().verify();
}

#[tokio::test]
async fn test_found_user_is_hydrated() {
    let mut mock = MockService::new();
    mock.expect_get_users("u1").return_ok(vec![user("u1", "ann")]);
    mock.expect_hydrate().return_ok((
        vec![address("a1", "Main St")],
        vec![card("c1", "************1111")],
    ));
    let resolver = Resolver::new(mock);

    let resolved = resolver.get_users(GetRequest::one("u1")).await;

    match resolved.response {
        Response::User(found) => {
            assert_eq!(found.id, "u1");
            assert_eq!(found.addresses, vec![address("a1", "Main St")]);
            assert_eq!(found.cards.len(), 1);
        }
        other => panic!("expected a user, got {other:?}"),
    }
    resolver.service().verify();
}

#[tokio::test]
async fn test_first_match_is_canonical() {
    let mut mock = MockService::new();
    mock.expect_get_users("u1")
        .return_ok(vec![user("u1", "first"), user("u1", "second")]);
    mock.expect_hydrate().return_ok((vec![], vec![]));
    let resolver = Resolver::new(mock);

    let resolved = resolver.get_users(GetRequest::one("u1")).await;

    assert!(matches!(resolved.response, Response::User(ref u) if u.username == "first"));
}

#[tokio::test]
async fn test_nested_views_return_only_hydrated_records() {
    let mut mock = MockService::new();
    mock.expect_get_users("u1").return_ok(vec![user("u1", "ann")]);
    mock.expect_hydrate()
        .return_ok((vec![address("a1", "Main St")], vec![card("c1", "1234")]));
    mock.expect_get_users("u1").return_ok(vec![user("u1", "ann")]);
    mock.expect_hydrate()
        .return_ok((vec![address("a1", "Main St")], vec![card("c1", "1234")]));
    let resolver = Resolver::new(mock);

    let addresses = resolver
        .get_users(GetRequest::nested("u1", "addresses"))
        .await;
    assert_eq!(
        addresses.response.embedded(),
        Some(&Collection::Addresses(vec![address("a1", "Main St")]))
    );

    let cards = resolver.get_users(GetRequest::nested("u1", "cards")).await;
    assert_eq!(
        cards.response.embedded(),
        Some(&Collection::Cards(vec![card("c1", "1234")]))
    );
    resolver.service().verify();
}

#[tokio::test]
async fn test_existing_user_without_addresses_gives_empty_envelope() {
    let mut mock = MockService::new();
    mock.expect_get_users("u1").return_ok(vec![user("u1", "ann")]);
    mock.expect_hydrate().return_ok((vec![], vec![card("c1", "1234")]));
    let resolver = Resolver::new(mock);

    let resolved = resolver
        .get_users(GetRequest::nested("u1", "addresses"))
        .await;

    assert_eq!(
        resolved.response.embedded(),
        Some(&Collection::Addresses(vec![]))
    );
    assert!(resolved.is_ok());
}

#[tokio::test]
async fn test_lookup_error_is_returned_with_placeholder() {
    let mut mock = MockService::new();
    mock.expect_get_users("").return_err(store_down());
    mock.expect_get_users("u1").return_err(store_down());
    mock.expect_get_users("u1").return_err(store_down());
    let resolver = Resolver::new(mock);

    let all = resolver.get_users(GetRequest::all()).await;
    assert_eq!(all.response.embedded(), Some(&Collection::Users(vec![])));
    assert_eq!(all.error, Some(store_down()));

    let one = resolver.get_users(GetRequest::one("u1")).await;
    assert_eq!(one.response, Response::User(User::default()));
    assert_eq!(one.error, Some(store_down()));

    let nested = resolver.get_users(GetRequest::nested("u1", "cards")).await;
    assert_eq!(nested.response.embedded(), Some(&Collection::Cards(vec![])));
    assert_eq!(nested.error, Some(store_down()));

    resolver.service().verify();
}

#[tokio::test]
async fn test_hydration_error_is_not_swallowed() {
    let mut mock = MockService::new();
    mock.expect_get_users("u1").return_ok(vec![user("u1", "ann")]);
    mock.expect_hydrate().return_err(store_down());
    let resolver = Resolver::new(mock);

    let resolved = resolver.get_users(GetRequest::one("u1")).await;

    assert!(matches!(resolved.response, Response::User(ref u) if u.id == "u1"));
    assert_eq!(resolved.error, Some(store_down()));
}

#[tokio::test]
async fn test_user_read_spans() {
    let mut mock = MockService::new();
    mock.expect_get_users("u1").return_ok(vec![user("u1", "ann")]);
    mock.expect_hydrate().return_ok((vec![], vec![]));
    mock.expect_get_users("ghost").return_ok(vec![]);
    let spans = Arc::new(RecordingSpans::default());
    let resolver = Resolver::with_spans(mock, spans.clone());

    resolver.get_users(GetRequest::one("u1")).await;
    resolver.get_users(GetRequest::one("ghost")).await;

    assert_eq!(
        *spans.names.lock().unwrap(),
        vec![
            "Get Users",
            "users from db",
            "attributes from db",
            "Get Users",
            "users from db",
        ]
    );
}

// =============================================================================
// Address and card read paths
// =============================================================================

#[tokio::test]
async fn test_address_reads() {
    let mut mock = MockService::new();
    mock.expect_get_addresses("")
        .return_ok(vec![address("a1", "Main St"), address("a2", "High St")]);
    mock.expect_get_addresses("a2")
        .return_ok(vec![address("a2", "High St")]);
    mock.expect_get_addresses("nope").return_ok(vec![]);
    let resolver = Resolver::new(mock);

    let all = resolver.get_addresses(GetRequest::all()).await;
    assert_eq!(all.response.embedded().map(Collection::len), Some(2));

    let one = resolver.get_addresses(GetRequest::one("a2")).await;
    assert_eq!(one.response, Response::Address(address("a2", "High St")));

    let missing = resolver.get_addresses(GetRequest::one("nope")).await;
    assert_eq!(missing.response, Response::Address(Address::default()));
    assert!(missing.is_ok());

    resolver.service().verify();
}

#[tokio::test]
async fn test_card_reads() {
    let mut mock = MockService::new();
    mock.expect_get_cards("").return_ok(vec![]);
    mock.expect_get_cards("c1").return_ok(vec![card("c1", "****1234")]);
    mock.expect_get_cards("c9").return_err(store_down());
    let resolver = Resolver::new(mock);

    let all = resolver.get_cards(GetRequest::all()).await;
    assert_eq!(all.response.embedded(), Some(&Collection::Cards(vec![])));

    let one = resolver.get_cards(GetRequest::one("c1")).await;
    assert_eq!(one.response, Response::Card(card("c1", "****1234")));

    let failed = resolver.get_cards(GetRequest::one("c9")).await;
    assert_eq!(failed.response, Response::Card(Card::default()));
    assert_eq!(failed.error, Some(store_down()));

    resolver.service().verify();
}

// =============================================================================
// Writes, delete, health
// =============================================================================

#[tokio::test]
async fn test_delete_status_follows_error() {
    let mut mock = MockService::new();
    mock.expect_delete(EntityKind::Cards, "c1").return_ok(());
    mock.expect_delete(EntityKind::Customers, "u9")
        .return_err(ServiceError::NotFound {
            kind: EntityKind::Customers,
            id: "u9".into(),
        });
    let resolver = Resolver::new(mock);

    let ok = resolver
        .delete(DeleteRequest {
            entity: EntityKind::Cards,
            id: "c1".into(),
        })
        .await;
    assert_eq!(ok.response, StatusResponse { status: true });
    assert!(ok.error.is_none());

    let failed = resolver
        .delete(DeleteRequest {
            entity: EntityKind::Customers,
            id: "u9".into(),
        })
        .await;
    assert_eq!(failed.response, StatusResponse { status: false });
    assert!(matches!(failed.error, Some(ServiceError::NotFound { .. })));

    resolver.service().verify();
}

#[tokio::test]
async fn test_health_never_errors() {
    let mut mock = MockService::new();
    mock.expect_health(vec![
        Health::new("user", Health::OK),
        Health::new("user-db", Health::ERR),
    ]);
    let resolver = Resolver::new(mock);

    let resolved = resolver.health().await;

    assert!(resolved.is_ok());
    let statuses: Vec<(&str, bool)> = resolved
        .response
        .health
        .iter()
        .map(|h| (h.service.as_str(), h.is_ok()))
        .collect();
    assert_eq!(statuses, vec![("user", true), ("user-db", false)]);
}

#[tokio::test]
async fn test_login_failure_keeps_error() {
    let mut mock = MockService::new();
    mock.expect_login().return_err(ServiceError::Auth);
    let resolver = Resolver::new(mock);

    let resolved = resolver
        .login(LoginRequest {
            username: "ann".into(),
            password: "wrong".into(),
        })
        .await;

    assert_eq!(resolved.response, UserResponse::default());
    assert_eq!(resolved.error, Some(ServiceError::Auth));
}

#[tokio::test]
async fn test_dispatch_routes_each_request() {
    let mut mock = MockService::new();
    mock.expect_register().return_ok("u7".into());
    mock.expect_post_address("u7").return_ok("a3".into());
    mock.expect_post_user()
        .return_err(ServiceError::Validation("username ann is taken".into()));
    mock.expect_health(vec![Health::new("user", Health::OK)]);
    let resolver = Resolver::new(mock);

    let registered = resolver
        .dispatch(Request::Register(RegisterRequest {
            username: "zed".into(),
            password: "pw".into(),
            email: "zed@example.com".into(),
            ..RegisterRequest::default()
        }))
        .await;
    assert_eq!(
        serde_json::to_value(&registered.response).unwrap(),
        serde_json::json!({"id": "u7"})
    );

    let posted = resolver
        .dispatch(Request::PostAddress(AddressPostRequest {
            address: address("", "Main St"),
            user_id: "u7".into(),
        }))
        .await;
    assert!(posted.is_ok());

    let duplicate = resolver
        .dispatch(Request::PostUser(user("", "ann")))
        .await;
    assert_eq!(duplicate.error.as_ref().map(ServiceError::code), Some(1001));

    let health = resolver.dispatch(Request::Health).await;
    assert!(matches!(health.response, Response::Health(ref h) if h.health.len() == 1));

    resolver.service().verify();
}
