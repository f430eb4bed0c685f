use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use tracing::{info, warn};
use urlencoding::encode;

use super::dto::{BucketListForm, UpdateBucketForm, UpdateBucketQuery};
use super::response::AppError;
use super::validation::validate_fields;
use super::{AppState, views};
use crate::auth::SessionUser;
use crate::types::{BucketList, BucketListRecord};

fn render_index(state: &AppState, session: &SessionUser) -> Result<Html<String>, AppError> {
    let lists = state.registry.bucket_lists(&session.username)?;
    Ok(views::bucket_lists_page(&session.username, &lists))
}

pub async fn list_bucket_lists(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Html<String>, AppError> {
    render_index(&state, &session)
}

/// Stores the list in memory and mirrors a header row to the database.
/// The database row is best effort: titles are unique across all accounts there.
pub async fn add_bucket_list(
    State(state): State<AppState>,
    session: SessionUser,
    Form(form): Form<BucketListForm>,
) -> Result<Html<String>, AppError> {
    validate_fields(&[
        ("Title", form.title.as_str()),
        ("Description", form.description.as_str()),
    ])?;
    state.registry.put_bucket_list(
        &session.username,
        BucketList::new(&form.title, &form.description),
    )?;

    let record = BucketListRecord {
        title: form.title,
        description: form.description,
        account: session.username.clone(),
        created_at: Utc::now(),
    };
    if let Err(e) = state.store.create_bucket_list(&record) {
        warn!(
            username = %session.username,
            title = %record.title,
            error = %e,
            "failed to persist bucket list"
        );
    }

    info!(username = %session.username, title = %record.title, "bucket list added");
    render_index(&state, &session)
}

/// Removes the list from memory only; any persisted row stays.
pub async fn delete_bucket_list(
    State(state): State<AppState>,
    session: SessionUser,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    if state
        .registry
        .remove_bucket_list(&session.username, &name)?
        .is_some()
    {
        info!(username = %session.username, name = %name, "bucket list deleted");
    }
    render_index(&state, &session)
}

/// First half of an edit: drop the old entry, then hand over to the form.
pub async fn begin_update_bucket_list(
    State(state): State<AppState>,
    session: SessionUser,
    Path((name, description)): Path<(String, String)>,
) -> Result<Response, AppError> {
    state.registry.remove_bucket_list(&session.username, &name)?;

    let target = format!(
        "/update_bucket?name={}&description={}",
        encode(&name),
        encode(&description)
    );
    Ok(Redirect::to(&target).into_response())
}

/// Renders the prefilled edit form; the extractor only gates on a session.
pub async fn update_bucket_form(
    _: SessionUser,
    Query(query): Query<UpdateBucketQuery>,
) -> Html<String> {
    views::update_bucket_page(&query.name, &query.description)
}

pub async fn update_bucket(
    State(state): State<AppState>,
    session: SessionUser,
    Form(form): Form<UpdateBucketForm>,
) -> Result<Html<String>, AppError> {
    validate_fields(&[
        ("Name", form.name.as_str()),
        ("Description", form.description.as_str()),
    ])?;
    state.registry.put_bucket_list(
        &session.username,
        BucketList::new(&form.name, &form.description),
    )?;

    info!(username = %session.username, name = %form.name, "bucket list updated");
    render_index(&state, &session)
}
