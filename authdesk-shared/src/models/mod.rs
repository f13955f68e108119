pub mod auth;
pub mod category;
pub mod errors;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, UserId};
pub use category::Category;
pub use errors::ErrorResponse;
pub use user::{CurrentUser, UpdateUserRequest, UserProfile};
