//! # Bucketlist
//!
//! A session-based web app where users sign up, log in, and keep named bucket
//! lists of activities. Usable as a standalone binary or as a library.
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use axum_extra::extract::cookie::Key;
//! use bucketlist::server::{AppState, create_router};
//! use bucketlist::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new("./data/bucketlist.db").unwrap();
//! store.initialize().unwrap();
//!
//! let state = AppState::new(Arc::new(store), Key::generate());
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `bucketlist` binary. Disable with `default-features = false`.

pub mod auth;
pub mod config;
pub mod error;
pub mod registry;
pub mod server;
pub mod store;
pub mod types;
