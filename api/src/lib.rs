//! Typed client core for the Verdance ESG points platform.
//!
//! This crate owns everything that does not depend on a UI framework: the
//! API data model, the HTTP client wrapper with its 401 policy, the one-call
//! service façade, token storage, and the session store consumed by the
//! browser app and the CLI. Platform specifics (fetch, local storage, window
//! navigation) plug in through the [`Transport`], [`TokenStore`] and
//! [`Navigator`] traits.

pub mod error;
pub mod http;
pub mod navigation;
pub mod services;
pub mod session;
pub mod storage;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

pub use error::{ApiError, TransportError};
pub use http::{ApiClient, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
pub use navigation::{DASHBOARD_ROUTE, LOGIN_ROUTE, Navigator, NoopNavigator};
pub use services::{AuthService, PointsService, TasksService, UsersService};
pub use session::{
    LOAD_USER_FAILED_MESSAGE, LOGIN_FAILED_MESSAGE, REGISTER_FAILED_MESSAGE, Session, SessionState,
};
pub use storage::{AUTH_TOKEN_KEY, MemoryTokenStore, TokenStore};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
pub use types::*;
