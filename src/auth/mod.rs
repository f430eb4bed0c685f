mod password;
mod session;

pub use password::PasswordHasher;
pub use session::{
    SESSION_COOKIE, SessionUser, decode_key, encode_key, end_session, start_session,
};
