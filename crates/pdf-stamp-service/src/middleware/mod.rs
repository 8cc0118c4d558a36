pub mod auth;

pub use auth::function_key_auth;
