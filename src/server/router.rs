use std::sync::Arc;
use std::time::Instant;

use axum::extract::{FromRef, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Router, routing::get};
use axum_extra::extract::cookie::Key;

use super::{account, activities, bucketlists};
use crate::auth::PasswordHasher;
use crate::registry::Registry;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub registry: Arc<Registry>,
    pub hasher: Arc<PasswordHasher>,
    cookie_key: Key,
}

impl AppState {
    /// Builds state with an empty registry. Users from earlier runs must sign up again.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, cookie_key: Key) -> Self {
        Self {
            store,
            registry: Arc::new(Registry::new()),
            hasher: Arc::new(PasswordHasher::new()),
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(account::login_form).post(account::login))
        .route("/login", get(account::login_form).post(account::login))
        .route("/signup", get(account::signup_form).post(account::signup))
        .route("/logout", get(account::logout))
        .route(
            "/add_bucketlist",
            get(bucketlists::list_bucket_lists).post(bucketlists::add_bucket_list),
        )
        .route(
            "/delete_bucketlist/{name}",
            get(bucketlists::delete_bucket_list),
        )
        .route(
            "/back_to_bucketlists",
            get(bucketlists::list_bucket_lists),
        )
        .route(
            "/update_bucket",
            get(bucketlists::update_bucket_form).post(bucketlists::update_bucket),
        )
        .route(
            "/update_bucketlist/{name}/{description}",
            get(bucketlists::begin_update_bucket_list).post(bucketlists::begin_update_bucket_list),
        )
        .route(
            "/add_activity",
            get(activities::show_bucket_list).post(activities::add_activity),
        )
        .route(
            "/update_activity/{name}/{title}/{description}",
            get(activities::begin_update_activity).post(activities::begin_update_activity),
        )
        .route(
            "/updt_act",
            get(activities::update_activity_form).post(activities::update_activity),
        )
        .route(
            "/delete_activity/{name}/{title}",
            get(activities::delete_activity),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
