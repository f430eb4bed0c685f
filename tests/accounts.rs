//! Signup, login and logout flows driven through the router.

mod common;

use axum::http::StatusCode;
use bucketlist::store::Store;
use common::{TestApp, body_string, location, session_cookie};

#[tokio::test]
async fn health_check() {
    let app = TestApp::new();
    let resp = app.get("/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "OK");
}

#[tokio::test]
async fn root_and_login_render_login_form() {
    let app = TestApp::new();
    for uri in ["/", "/login"] {
        let resp = app.get(uri, None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_string(resp).await.contains(r#"action="/login""#));
    }
}

#[tokio::test]
async fn signup_creates_registry_entry_and_account_row() {
    let app = TestApp::new();
    let resp = app
        .post_form(
            "/signup",
            "username=alice&email=alice%40example.com&password=pw&confirm_password=pw",
            None,
        )
        .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/add_bucketlist");
    assert!(session_cookie(&resp).is_some());
    assert!(app.state.registry.contains("alice"));

    let creds = app.state.registry.credentials("alice").unwrap();
    assert_eq!(creds.email, "alice@example.com");

    let account = app.state.store.get_account("alice").unwrap().unwrap();
    assert_eq!(account.email, "alice@example.com");
    assert_ne!(account.password_hash, "pw");
    assert_eq!(account.password_hash, creds.password_hash);
}

#[tokio::test]
async fn signup_with_mismatched_passwords_changes_nothing() {
    let app = TestApp::new();
    let resp = app
        .post_form(
            "/signup",
            "username=alice&email=alice%40example.com&password=pw&confirm_password=other",
            None,
        )
        .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/signup");
    assert!(session_cookie(&resp).is_none());
    assert!(!app.state.registry.contains("alice"));
    assert!(app.state.store.list_accounts().unwrap().is_empty());
}

#[tokio::test]
async fn signup_with_taken_username_keeps_existing_user() {
    let app = TestApp::new();
    app.signup("alice").await;

    let resp = app
        .post_form(
            "/signup",
            "username=alice&email=mallory%40example.com&password=x&confirm_password=x",
            None,
        )
        .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/signup");
    assert_eq!(
        app.state.registry.credentials("alice").unwrap().email,
        "alice@example.com"
    );
}

#[tokio::test]
async fn login_with_correct_credentials_lists_bucket_lists() {
    let app = TestApp::new();
    let cookie = app.signup("alice").await;
    app.add_bucket_list(&cookie, "Travel", "See+the+world").await;

    let resp = app
        .post_form("/login", "username=alice&password=pw", None)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let fresh_cookie = session_cookie(&resp).expect("login sets a session cookie");
    let body = body_string(resp).await;
    assert!(body.contains("alice's bucket lists"));
    assert!(body.contains("Travel"));

    let resp = app.get("/back_to_bucketlists", Some(&fresh_cookie)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("See the world"));
}

#[tokio::test]
async fn login_failures_return_the_login_form() {
    let app = TestApp::new();
    app.signup("alice").await;

    for body in ["username=alice&password=wrong", "username=nobody&password=pw"] {
        let resp = app.post_form("/login", body, None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(session_cookie(&resp).is_none());
        let page = body_string(resp).await;
        assert!(page.contains(r#"action="/login""#));
        assert!(!page.contains("bucket lists"));
    }
}

#[tokio::test]
async fn logout_clears_session_and_redirects() {
    let app = TestApp::new();
    let cookie = app.signup("alice").await;

    let resp = app.get("/logout", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    let cleared = session_cookie(&resp).expect("logout sends a removal cookie");
    assert_eq!(cleared, "user=");
}

#[tokio::test]
async fn pages_without_session_are_unauthorized() {
    let app = TestApp::new();

    for uri in [
        "/add_bucketlist",
        "/back_to_bucketlists",
        "/add_activity?name=Travel",
        "/update_bucket?name=Travel&description=d",
        "/updt_act?name=Travel&title=t&description=d",
    ] {
        let resp = app.get(uri, None).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }

    let resp = app.get("/back_to_bucketlists", Some("user=garbage")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_from_another_app_instance_is_rejected() {
    let first = TestApp::new();
    let cookie = first.signup("alice").await;

    let second = TestApp::new();
    let resp = second.get("/back_to_bucketlists", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
