//! Demo entry point: starts the account store, seeds a few customers, and logs
//! the encoded response of a series of resolver requests.

use tracing::{info, warn, Instrument};
use user_accounts::lifecycle::{setup_tracing, AccountSystem, Config};
use user_accounts::model::{Address, Card, EntityKind};
use user_accounts::resolver::{
    AddressPostRequest, CardPostRequest, DeleteRequest, GetRequest, LoginRequest,
    RegisterRequest, Request, Resolver,
};
use user_accounts::service::{AccountService, Service};

async fn seed<S: Service>(resolver: &Resolver<S>) -> Result<String, String> {
    let registered = resolver
        .register(RegisterRequest {
            username: "Eve_Berger".into(),
            password: "eve".into(),
            email: "eve@example.com".into(),
            first_name: "Eve".into(),
            last_name: "Berger".into(),
        })
        .await
        .into_result()
        .map_err(|e| e.to_string())?;
    let user_id = registered.id;

    resolver
        .register(RegisterRequest {
            username: "user".into(),
            password: "password".into(),
            email: "user@example.com".into(),
            first_name: "User".into(),
            last_name: "Name".into(),
        })
        .await
        .into_result()
        .map_err(|e| e.to_string())?;

    resolver
        .post_address(AddressPostRequest {
            address: Address {
                street: "Whitelees Road".into(),
                number: "246".into(),
                country: "United Kingdom".into(),
                city: "Glasgow".into(),
                postcode: "G67 3DL".into(),
                ..Address::default()
            },
            user_id: user_id.clone(),
        })
        .await
        .into_result()
        .map_err(|e| e.to_string())?;

    resolver
        .post_card(CardPostRequest {
            card: Card {
                long_num: "5544154011345918".into(),
                expires: "08/19".into(),
                ccv: "958".into(),
                ..Card::default()
            },
            user_id: user_id.clone(),
        })
        .await
        .into_result()
        .map_err(|e| e.to_string())?;

    Ok(user_id)
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);
    info!(?config, "Starting user accounts");

    let system = AccountSystem::start(&config);
    let resolver = Resolver::new(AccountService::new(system.store.clone()));

    let user_id = if config.seed_demo_data {
        seed(&resolver)
            .instrument(tracing::info_span!("seed"))
            .await?
    } else {
        String::new()
    };

    let requests = vec![
        Request::GetUsers(GetRequest::all()),
        Request::GetUsers(GetRequest::one(user_id.clone())),
        Request::GetUsers(GetRequest::nested(user_id.clone(), "addresses")),
        Request::GetUsers(GetRequest::nested(user_id.clone(), "cards")),
        Request::GetUsers(GetRequest::one("ghost")),
        Request::GetUsers(GetRequest::nested("ghost", "cards")),
        Request::GetCards(GetRequest::all()),
        Request::Login(LoginRequest {
            username: "Eve_Berger".into(),
            password: "eve".into(),
        }),
        Request::Login(LoginRequest {
            username: "Eve_Berger".into(),
            password: "wrong".into(),
        }),
        Request::Delete(DeleteRequest {
            entity: EntityKind::Cards,
            id: "missing".into(),
        }),
        Request::Health,
    ];

    for request in requests {
        let operation = request.operation();
        let resolved = resolver.dispatch(request).await;
        let body = serde_json::to_string(&resolved.response).map_err(|e| e.to_string())?;
        match &resolved.error {
            None => info!(operation, %body, "Resolved"),
            Some(e) => warn!(operation, %body, error = %e, "Resolved with error"),
        }
    }

    drop(resolver);
    system.shutdown().await
}
