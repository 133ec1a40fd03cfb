pub mod auth;
pub mod error;
pub mod models;
pub mod store;
pub mod validate;

pub use auth::TokenAuthenticator;
pub use error::AppError;
pub use models::{User, UserInput};
pub use store::UserStore;
pub use validate::validate;
