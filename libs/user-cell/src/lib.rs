pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::AccountError;
pub use models::{LoginRequest, PublicUser, RegisterRequest, SetupRequest, UserAccount};
pub use services::AccountService;
