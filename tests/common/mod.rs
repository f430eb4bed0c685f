#![allow(dead_code)]

mod test_app;

pub use test_app::{TestApp, body_string, location, session_cookie};
