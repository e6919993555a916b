//! HTTP middleware: session layer and authentication extractors.

pub mod auth;
pub mod session;

pub use auth::{
    OptionalUser, RequireAdmin, clear_current_admin, clear_current_user, set_current_admin,
    set_current_user,
};
pub use session::{create_session_layer, create_session_store};
