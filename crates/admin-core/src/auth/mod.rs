//! Auth
//!
//! Token-based session and the gate that guards dashboard routes. The
//! token is opaque: presence of a non-empty value is the whole check.

mod gate;
mod session;

pub use gate::{AuthGate, Resolution};
pub use session::{AuthState, MemoryTokenStore, Session, TokenStore};
