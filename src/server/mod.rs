mod account;
mod activities;
mod bucketlists;
pub mod dto;
pub mod response;
mod router;
mod validation;
pub mod views;

pub use router::{AppState, create_router};
