pub mod auth;
pub mod logging;
pub mod role;

pub use auth::Authenticated;
pub use logging::RequestLogger;
pub use role::{AdminUser, RequireRole};
