use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::server::response::AppError;

pub const SESSION_COOKIE: &str = "user";

/// The identity carried by the encrypted session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub email: String,
}

impl SessionUser {
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    fn from_jar(jar: &PrivateCookieJar) -> Result<Self> {
        let cookie = jar.get(SESSION_COOKIE).ok_or(Error::Unauthenticated)?;
        serde_json::from_str(cookie.value()).map_err(|_| Error::Unauthenticated)
    }
}

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> std::result::Result<Self, AppError> {
        let jar = PrivateCookieJar::from_headers(&parts.headers, Key::from_ref(state));
        Ok(SessionUser::from_jar(&jar)?)
    }
}

pub fn start_session(jar: PrivateCookieJar, user: &SessionUser) -> Result<PrivateCookieJar> {
    let value = serde_json::to_string(user)?;
    Ok(jar.add(build_cookie(value)))
}

pub fn end_session(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(build_cookie(String::new()))
}

fn build_cookie(value: String) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Encodes a cookie key for the `.session_key` file.
#[must_use]
pub fn encode_key(key: &Key) -> String {
    STANDARD.encode(key.master())
}

pub fn decode_key(encoded: &str) -> Result<Key> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| Error::Config(format!("invalid session key encoding: {e}")))?;
    Key::try_from(bytes.as_slice())
        .map_err(|e| Error::Config(format!("invalid session key: {e}")))
}
