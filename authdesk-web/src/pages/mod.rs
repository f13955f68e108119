mod error;
mod home;
pub mod login;
pub mod register;

pub use error::ErrorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;
