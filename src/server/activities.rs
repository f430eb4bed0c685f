use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::info;
use urlencoding::encode;

use super::dto::{ActivityForm, BucketListQuery, UpdateActivityForm, UpdateActivityQuery};
use super::response::AppError;
use super::validation::validate_fields;
use super::{AppState, views};
use crate::auth::SessionUser;
use crate::error::Error;
use crate::types::Activity;

pub async fn show_bucket_list(
    State(state): State<AppState>,
    session: SessionUser,
    Query(query): Query<BucketListQuery>,
) -> Result<Html<String>, AppError> {
    let activities = state.registry.activities(&session.username, &query.name)?;
    Ok(views::bucket_list_page(&query.name, &activities))
}

pub async fn add_activity(
    State(state): State<AppState>,
    session: SessionUser,
    Query(query): Query<BucketListQuery>,
    Form(form): Form<ActivityForm>,
) -> Result<Html<String>, AppError> {
    validate_fields(&[
        ("Title", form.title.as_str()),
        ("Description", form.description.as_str()),
    ])?;
    let activities = state.registry.add_activity(
        &session.username,
        &query.name,
        Activity::new(form.title, form.description),
    )?;
    Ok(views::bucket_list_page(&query.name, &activities))
}

/// First half of an edit: drop the first activity with this title, then hand
/// over to the form. A missing list or title is not an error here.
pub async fn begin_update_activity(
    State(state): State<AppState>,
    session: SessionUser,
    Path((name, title, description)): Path<(String, String, String)>,
) -> Result<Response, AppError> {
    match state
        .registry
        .remove_activity(&session.username, &name, &title)
    {
        Ok(_) | Err(Error::BucketListNotFound(_)) => {}
        Err(e) => return Err(e.into()),
    }

    let target = format!(
        "/updt_act?name={}&title={}&description={}",
        encode(&name),
        encode(&title),
        encode(&description)
    );
    Ok(Redirect::to(&target).into_response())
}

/// Renders the prefilled edit form; the extractor only gates on a session.
pub async fn update_activity_form(
    _: SessionUser,
    Query(query): Query<UpdateActivityQuery>,
) -> Html<String> {
    views::update_activity_page(&query.name, &query.title, &query.description)
}

pub async fn update_activity(
    State(state): State<AppState>,
    session: SessionUser,
    Form(form): Form<UpdateActivityForm>,
) -> Result<Html<String>, AppError> {
    validate_fields(&[
        ("Name", form.name.as_str()),
        ("Title", form.title.as_str()),
        ("Description", form.description.as_str()),
    ])?;
    let activities = state.registry.add_activity(
        &session.username,
        &form.name,
        Activity::new(form.title, form.description),
    )?;

    info!(username = %session.username, name = %form.name, "activity updated");
    Ok(views::bucket_list_page(&form.name, &activities))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    session: SessionUser,
    Path((name, title)): Path<(String, String)>,
) -> Result<Response, AppError> {
    state
        .registry
        .remove_activity(&session.username, &name, &title)?
        .ok_or(Error::ActivityNotFound(title))?;

    let target = format!("/add_activity?name={}", encode(&name));
    Ok(Redirect::to(&target).into_response())
}
