use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use chrono::Utc;
use tracing::{info, warn};

use super::dto::{LoginForm, SignupForm};
use super::response::AppError;
use super::{AppState, views};
use crate::auth::{SessionUser, end_session, start_session};
use crate::error::Error;
use crate::types::{Account, User};

pub async fn login_form() -> Html<String> {
    views::login_page()
}

/// Unknown users and wrong passwords both fall back to the login form.
pub async fn login(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let Some(creds) = state.registry.credentials(&form.username) else {
        info!(username = %form.username, "login for unknown user");
        return Ok(views::login_page().into_response());
    };

    if !state.hasher.verify(&form.password, &creds.password_hash)? {
        info!(username = %creds.username, "login with wrong password");
        return Ok(views::login_page().into_response());
    }

    let session = SessionUser::new(&creds.username, &creds.email);
    let jar = start_session(jar, &session)?;
    let lists = state.registry.bucket_lists(&creds.username)?;

    info!(username = %creds.username, "user logged in");
    Ok((jar, views::bucket_lists_page(&creds.username, &lists)).into_response())
}

pub async fn signup_form() -> Html<String> {
    views::signup_page()
}

pub async fn signup(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    if form.password != form.confirm_password {
        return Ok(Redirect::to("/signup").into_response());
    }
    // Skip the hash for a name that is already taken.
    if state.registry.contains(&form.username) {
        info!(username = %form.username, "signup for taken username");
        return Ok(Redirect::to("/signup").into_response());
    }

    let password_hash = state.hasher.hash(&form.password)?;
    let user = User::new(&form.username, &form.email, &password_hash);

    match state.registry.try_insert_user(user) {
        Ok(()) => {}
        Err(Error::AlreadyExists) => {
            info!(username = %form.username, "signup for taken username");
            return Ok(Redirect::to("/signup").into_response());
        }
        Err(e) => return Err(e.into()),
    }

    let account = Account {
        username: form.username.clone(),
        password_hash,
        email: form.email.clone(),
        created_at: Utc::now(),
    };
    if let Err(e) = state.store.create_account(&account) {
        warn!(username = %account.username, error = %e, "failed to persist account");
    }

    let jar = start_session(jar, &SessionUser::new(&form.username, &form.email))?;

    info!(username = %form.username, "user signed up");
    Ok((jar, Redirect::to("/add_bucketlist")).into_response())
}

pub async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    (end_session(jar), Redirect::to("/login"))
}
