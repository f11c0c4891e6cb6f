//! Authentication module
//!
//! Sessions are cookie based: logging in sets a `me` cookie, and every
//! state-changing request must echo a nonce derived from it.
//!
//! - `SessionStore` reads the current `me` cookie (from the HTTP cookie jar
//!   or from memory)
//! - `Nonce` derives the `_nonce` form field from that cookie

mod nonce;
mod session;

pub use nonce::{Nonce, NonceMode, NONCE_PARAM};
pub use session::{
    parse_session_cookie, JarSessionStore, MemorySessionStore, SessionCookie, SessionStore,
    SESSION_COOKIE_NAME,
};
