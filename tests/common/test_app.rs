use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use axum_extra::extract::cookie::Key;
use bucketlist::server::{AppState, create_router};
use bucketlist::store::{SqliteStore, Store};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub temp_dir: TempDir,
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = SqliteStore::new(temp_dir.path().join("bucketlist.db")).expect("open store");
        store.initialize().expect("initialize store");

        let state = AppState::new(Arc::new(store), Key::generate());
        let router = create_router(state.clone());

        Self {
            temp_dir,
            state,
            router,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).expect("build request"))
            .await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).expect("build request"))
            .await
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed")
    }

    /// Signs up `username` with password `pw` and returns the session cookie.
    pub async fn signup(&self, username: &str) -> String {
        let body = format!(
            "username={username}&email={username}%40example.com&password=pw&confirm_password=pw"
        );
        let resp = self.post_form("/signup", &body, None).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        session_cookie(&resp).expect("signup sets a session cookie")
    }

    pub async fn add_bucket_list(&self, cookie: &str, title: &str, description: &str) -> String {
        let body = format!("title={title}&description={description}");
        let resp = self.post_form("/add_bucketlist", &body, Some(cookie)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        body_string(resp).await
    }
}

/// The `name=value` pair of the first Set-Cookie header.
pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    let value = resp.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    value.split(';').next().map(str::to_string)
}

pub fn location(resp: &Response<Body>) -> String {
    resp.headers()[header::LOCATION]
        .to_str()
        .expect("location is ascii")
        .to_string()
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}
