use roster_core::{TokenAuthenticator, UserStore};

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub users: UserStore,
    /// Allow-list checked by the authentication middleware.
    pub authenticator: TokenAuthenticator,
}

impl AppState {
    pub fn new(users: UserStore, authenticator: TokenAuthenticator) -> Self {
        Self {
            users,
            authenticator,
        }
    }
}
