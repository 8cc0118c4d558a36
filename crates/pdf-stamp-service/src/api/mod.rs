pub mod health;
pub mod stamp;

pub use health::health_check;
pub use stamp::{query_params, stamp};
