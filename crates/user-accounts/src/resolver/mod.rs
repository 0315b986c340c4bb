//! # Resolver
//!
//! Binds inbound [`Request`] values to [`Service`] calls and shapes the results
//! into [`Response`] values for the transport.
//!
//! ## Resource-view resolution
//!
//! The user read path answers an `(id, attr)` selector with one of four shapes:
//!
//! | `id` | match | `attr` | response |
//! |------|-------|--------|----------|
//! | empty | - | any | `{"_embedded": {"customer": [...]}}`, possibly empty |
//! | set | none | `addresses` / `cards` | empty envelope of that kind |
//! | set | none | none | zero-value [`User`] |
//! | set | first | `addresses` / `cards` | envelope of the *hydrated* nested records |
//! | set | first | none | the hydrated [`User`] |
//!
//! A missing parent is deliberately not an error for nested requests, and a
//! missing entity is a zero value rather than an error. Callers rely on
//! telling these apart, so keep them as they are.
//!
//! Address and card reads follow the same rules without the nested views or
//! hydration.
//!
//! Errors from the Service are never swallowed; see [`Resolved`].

pub mod request;
pub mod response;
pub mod spans;

pub use request::*;
pub use response::*;
pub use spans::*;

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn, Instrument};

use crate::model::User;
use crate::service::{Service, ServiceError};

/// Splits a Service result into a value (zero value on error) and the error.
fn split<T: Default>(result: Result<T, ServiceError>) -> (T, Option<ServiceError>) {
    match result {
        Ok(value) => (value, None),
        Err(e) => (T::default(), Some(e)),
    }
}

/// Request/response binding over a [`Service`].
///
/// Holds no mutable state; share it behind an `Arc` to serve concurrent requests.
pub struct Resolver<S> {
    service: S,
    spans: Arc<dyn SpanSource>,
}

impl<S: Service> Resolver<S> {
    pub fn new(service: S) -> Self {
        Self::with_spans(service, Arc::new(TracingSpans))
    }

    pub fn with_spans(service: S, spans: Arc<dyn SpanSource>) -> Self {
        Self { service, spans }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Runs `fut` inside a span named `name`.
    async fn step<F: Future>(&self, name: &'static str, fut: F) -> F::Output {
        fut.instrument(self.spans.span(name)).await
    }

    /// Routes a request to its operation.
    pub async fn dispatch(&self, request: Request) -> Resolved<Response> {
        let operation = request.operation();
        debug!(operation, "Dispatching");

        let resolved = match request {
            Request::Login(req) => self.login(req).await.map(Response::LoggedIn),
            Request::Register(req) => self.register(req).await.map(Response::Created),
            Request::GetUsers(req) => self.get_users(req).await,
            Request::GetAddresses(req) => self.get_addresses(req).await,
            Request::GetCards(req) => self.get_cards(req).await,
            Request::PostUser(user) => self.post_user(user).await.map(Response::Created),
            Request::PostAddress(req) => self.post_address(req).await.map(Response::Created),
            Request::PostCard(req) => self.post_card(req).await.map(Response::Created),
            Request::Delete(req) => self.delete(req).await.map(Response::Status),
            Request::Health => self.health().await.map(Response::Health),
        };

        if let Some(e) = &resolved.error {
            warn!(operation, code = e.code(), error = %e, "Operation failed");
        }
        resolved
    }

    pub async fn login(&self, req: LoginRequest) -> Resolved<UserResponse> {
        self.step("Login", async {
            let (user, error) = split(self.service.login(&req.username, &req.password).await);
            Resolved::with_error(UserResponse { user }, error)
        })
        .await
    }

    pub async fn register(&self, req: RegisterRequest) -> Resolved<PostResponse> {
        self.step("Register", async {
            let (id, error) = split(
                self.service
                    .register(
                        &req.username,
                        &req.password,
                        &req.email,
                        &req.first_name,
                        &req.last_name,
                    )
                    .await,
            );
            Resolved::with_error(PostResponse { id }, error)
        })
        .await
    }

    pub async fn get_users(&self, req: GetRequest) -> Resolved<Response> {
        self.step("Get Users", self.resolve_users(req)).await
    }

    async fn resolve_users(&self, req: GetRequest) -> Resolved<Response> {
        let (users, error) = split(
            self.step("users from db", self.service.get_users(&req.id))
                .await,
        );

        if req.id.is_empty() {
            return Resolved::with_error(Response::Embedded(Embedded::users(users)), error);
        }

        let Some(mut user) = users.into_iter().next() else {
            debug!(id = %req.id, attr = ?req.attr, "No such user");
            let response = match req.attr {
                Attribute::Addresses => Response::Embedded(Embedded::addresses(Vec::new())),
                Attribute::Cards => Response::Embedded(Embedded::cards(Vec::new())),
                Attribute::None => Response::User(User::default()),
            };
            return Resolved::with_error(response, error);
        };

        let hydrated = self
            .step("attributes from db", self.service.hydrate_user(&mut user))
            .await;
        let error = error.or(hydrated.err());

        let response = match req.attr {
            Attribute::Addresses => Response::Embedded(Embedded::addresses(user.addresses)),
            Attribute::Cards => Response::Embedded(Embedded::cards(user.cards)),
            Attribute::None => Response::User(user),
        };
        Resolved::with_error(response, error)
    }

    pub async fn get_addresses(&self, req: GetRequest) -> Resolved<Response> {
        self.step("Get Addresses", async {
            let (addresses, error) = split(
                self.step("address from db", self.service.get_addresses(&req.id))
                    .await,
            );
            let response = if req.id.is_empty() {
                Response::Embedded(Embedded::addresses(addresses))
            } else {
                Response::Address(addresses.into_iter().next().unwrap_or_default())
            };
            Resolved::with_error(response, error)
        })
        .await
    }

    pub async fn get_cards(&self, req: GetRequest) -> Resolved<Response> {
        self.step("Get Cards", async {
            let (cards, error) = split(
                self.step("card from db", self.service.get_cards(&req.id))
                    .await,
            );
            let response = if req.id.is_empty() {
                Response::Embedded(Embedded::cards(cards))
            } else {
                Response::Card(cards.into_iter().next().unwrap_or_default())
            };
            Resolved::with_error(response, error)
        })
        .await
    }

    pub async fn post_user(&self, user: User) -> Resolved<PostResponse> {
        self.step("Post User", async {
            let (id, error) = split(self.service.post_user(user).await);
            Resolved::with_error(PostResponse { id }, error)
        })
        .await
    }

    pub async fn post_address(&self, req: AddressPostRequest) -> Resolved<PostResponse> {
        self.step("Post Address", async {
            let (id, error) = split(self.service.post_address(req.address, &req.user_id).await);
            Resolved::with_error(PostResponse { id }, error)
        })
        .await
    }

    pub async fn post_card(&self, req: CardPostRequest) -> Resolved<PostResponse> {
        self.step("Post Card", async {
            let (id, error) = split(self.service.post_card(req.card, &req.user_id).await);
            Resolved::with_error(PostResponse { id }, error)
        })
        .await
    }

    /// `status` is true exactly when the Service reported no error; the error
    /// is still returned.
    pub async fn delete(&self, req: DeleteRequest) -> Resolved<StatusResponse> {
        self.step("Delete Entity", async {
            let error = self.service.delete(req.entity, &req.id).await.err();
            Resolved::with_error(
                StatusResponse {
                    status: error.is_none(),
                },
                error,
            )
        })
        .await
    }

    /// Never carries an error.
    pub async fn health(&self) -> Resolved<HealthResponse> {
        self.step("Health Check", async {
            Resolved::ok(HealthResponse {
                health: self.service.health().await,
            })
        })
        .await
    }
}
