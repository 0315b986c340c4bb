//! # Mock Service
//!
//! [`MockService`] implements [`Service`] from a queue of expectations instead of
//! a store. Use it to unit test the resolver's shaping rules, especially error
//! paths that are hard to provoke with real records.
//!
//! | Feature | MockService | AccountService + AccountSystem |
//! |---------|-------------|--------------------------------|
//! | **State** | None (expectations) | Real record actors |
//! | **Error Injection** | Easy (`return_err`) | Hard (needs a broken store) |
//! | **Use Case** | Resolver logic | End-to-end flows |
//!
//! Expectations are consumed in order. A call that does not match the next
//! expectation (wrong operation or wrong id) panics, and [`MockService::verify`]
//! panics if any expectation is left over.
//!
//! ```rust
//! use user_accounts::mock::MockService;
//! use user_accounts::model::User;
//! use user_accounts::resolver::{GetRequest, Resolver, Response};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockService::new();
//!     mock.expect_get_users("u1").return_ok(vec![User::new("ann", "a@example.com", "Ann", "Lee")]);
//!     mock.expect_hydrate().return_ok((vec![], vec![]));
//!
//!     let resolver = Resolver::new(mock);
//!     let resolved = resolver.get_users(GetRequest::one("u1")).await;
//!     assert!(matches!(resolved.response, Response::User(ref u) if u.username == "ann"));
//!     resolver.service().verify();
//! }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::model::{Address, Card, EntityKind, Health, User};
use crate::service::{Service, ServiceError};

type Reply<T> = Result<T, ServiceError>;

/// An expected call and the reply to give it.
enum Expectation {
    Login(Reply<User>),
    Register(Reply<String>),
    GetUsers { id: String, reply: Reply<Vec<User>> },
    GetAddresses { id: String, reply: Reply<Vec<Address>> },
    GetCards { id: String, reply: Reply<Vec<Card>> },
    PostUser(Reply<String>),
    PostAddress { user_id: String, reply: Reply<String> },
    PostCard { user_id: String, reply: Reply<String> },
    Delete { kind: EntityKind, id: String, reply: Reply<()> },
    Health(Vec<Health>),
    Hydrate(Reply<(Vec<Address>, Vec<Card>)>),
}

impl Expectation {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Login(_) => "login",
            Expectation::Register(_) => "register",
            Expectation::GetUsers { .. } => "get_users",
            Expectation::GetAddresses { .. } => "get_addresses",
            Expectation::GetCards { .. } => "get_cards",
            Expectation::PostUser(_) => "post_user",
            Expectation::PostAddress { .. } => "post_address",
            Expectation::PostCard { .. } => "post_card",
            Expectation::Delete { .. } => "delete",
            Expectation::Health(_) => "health",
            Expectation::Hydrate(_) => "hydrate_user",
        }
    }
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

fn lock(queue: &Queue) -> MutexGuard<'_, VecDeque<Expectation>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A [`Service`] that replays queued replies.
#[derive(Default)]
pub struct MockService {
    expectations: Queue,
}

impl MockService {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    fn builder<T>(
        &self,
        make: impl FnOnce(Reply<T>) -> Expectation + Send + 'static,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            expectations: Arc::clone(&self.expectations),
            make: Box::new(make),
        }
    }

    fn next(&self, called: &'static str) -> Expectation {
        match lock(&self.expectations).pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected {called} call: no expectations left"),
        }
    }

    pub fn expect_login(&mut self) -> ExpectationBuilder<User> {
        self.builder(Expectation::Login)
    }

    pub fn expect_register(&mut self) -> ExpectationBuilder<String> {
        self.builder(Expectation::Register)
    }

    pub fn expect_get_users(&mut self, id: &str) -> ExpectationBuilder<Vec<User>> {
        let id = id.to_string();
        self.builder(move |reply| Expectation::GetUsers { id, reply })
    }

    pub fn expect_get_addresses(&mut self, id: &str) -> ExpectationBuilder<Vec<Address>> {
        let id = id.to_string();
        self.builder(move |reply| Expectation::GetAddresses { id, reply })
    }

    pub fn expect_get_cards(&mut self, id: &str) -> ExpectationBuilder<Vec<Card>> {
        let id = id.to_string();
        self.builder(move |reply| Expectation::GetCards { id, reply })
    }

    pub fn expect_post_user(&mut self) -> ExpectationBuilder<String> {
        self.builder(Expectation::PostUser)
    }

    pub fn expect_post_address(&mut self, user_id: &str) -> ExpectationBuilder<String> {
        let user_id = user_id.to_string();
        self.builder(move |reply| Expectation::PostAddress { user_id, reply })
    }

    pub fn expect_post_card(&mut self, user_id: &str) -> ExpectationBuilder<String> {
        let user_id = user_id.to_string();
        self.builder(move |reply| Expectation::PostCard { user_id, reply })
    }

    pub fn expect_delete(&mut self, kind: EntityKind, id: &str) -> ExpectationBuilder<()> {
        let id = id.to_string();
        self.builder(move |reply| Expectation::Delete { kind, id, reply })
    }

    /// Expects a hydration; `return_ok((addresses, cards))` fills the user.
    pub fn expect_hydrate(&mut self) -> ExpectationBuilder<(Vec<Address>, Vec<Card>)> {
        self.builder(Expectation::Hydrate)
    }

    /// Health never fails, so it takes its records directly.
    pub fn expect_health(&mut self, records: Vec<Health>) {
        lock(&self.expectations).push_back(Expectation::Health(records));
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations);
        if let Some(first) = remaining.front() {
            panic!(
                "Not all expectations were met. {} remaining, next: {}",
                remaining.len(),
                first.name()
            );
        }
    }
}

/// Completes an expectation with its reply.
pub struct ExpectationBuilder<T> {
    expectations: Queue,
    make: Box<dyn FnOnce(Reply<T>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ServiceError) {
        self.push(Err(error));
    }

    fn push(self, reply: Reply<T>) {
        let expectation = (self.make)(reply);
        lock(&self.expectations).push_back(expectation);
    }
}

fn mismatch(called: &'static str, expected: &Expectation) -> ! {
    panic!(
        "Unexpected request or expectation mismatch: called {called}, expected {}",
        expected.name()
    )
}

#[async_trait]
impl Service for MockService {
    async fn login(&self, _username: &str, _password: &str) -> Result<User, ServiceError> {
        match self.next("login") {
            Expectation::Login(reply) => reply,
            other => mismatch("login", &other),
        }
    }

    async fn register(
        &self,
        _username: &str,
        _password: &str,
        _email: &str,
        _first_name: &str,
        _last_name: &str,
    ) -> Result<String, ServiceError> {
        match self.next("register") {
            Expectation::Register(reply) => reply,
            other => mismatch("register", &other),
        }
    }

    async fn get_users(&self, id: &str) -> Result<Vec<User>, ServiceError> {
        match self.next("get_users") {
            Expectation::GetUsers { id: expected, reply } => {
                assert_eq!(expected, id, "get_users called with unexpected id");
                reply
            }
            other => mismatch("get_users", &other),
        }
    }

    async fn get_addresses(&self, id: &str) -> Result<Vec<Address>, ServiceError> {
        match self.next("get_addresses") {
            Expectation::GetAddresses { id: expected, reply } => {
                assert_eq!(expected, id, "get_addresses called with unexpected id");
                reply
            }
            other => mismatch("get_addresses", &other),
        }
    }

    async fn get_cards(&self, id: &str) -> Result<Vec<Card>, ServiceError> {
        match self.next("get_cards") {
            Expectation::GetCards { id: expected, reply } => {
                assert_eq!(expected, id, "get_cards called with unexpected id");
                reply
            }
            other => mismatch("get_cards", &other),
        }
    }

    async fn post_user(&self, _user: User) -> Result<String, ServiceError> {
        match self.next("post_user") {
            Expectation::PostUser(reply) => reply,
            other => mismatch("post_user", &other),
        }
    }

    async fn post_address(&self, _address: Address, user_id: &str) -> Result<String, ServiceError> {
        match self.next("post_address") {
            Expectation::PostAddress {
                user_id: expected,
                reply,
            } => {
                assert_eq!(expected, user_id, "post_address called with unexpected user");
                reply
            }
            other => mismatch("post_address", &other),
        }
    }

    async fn post_card(&self, _card: Card, user_id: &str) -> Result<String, ServiceError> {
        match self.next("post_card") {
            Expectation::PostCard {
                user_id: expected,
                reply,
            } => {
                assert_eq!(expected, user_id, "post_card called with unexpected user");
                reply
            }
            other => mismatch("post_card", &other),
        }
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), ServiceError> {
        match self.next("delete") {
            Expectation::Delete {
                kind: expected_kind,
                id: expected_id,
                reply,
            } => {
                assert_eq!((expected_kind, expected_id.as_str()), (kind, id));
                reply
            }
            other => mismatch("delete", &other),
        }
    }

    async fn health(&self) -> Vec<Health> {
        match self.next("health") {
            Expectation::Health(records) => records,
            other => mismatch("health", &other),
        }
    }

    async fn hydrate_user(&self, user: &mut User) -> Result<(), ServiceError> {
        match self.next("hydrate_user") {
            Expectation::Hydrate(reply) => {
                let (addresses, cards) = reply?;
                user.addresses = addresses;
                user.cards = cards;
                Ok(())
            }
            other => mismatch("hydrate_user", &other),
        }
    }
}
