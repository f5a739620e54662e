pub mod adoption;
pub mod animal;
pub mod auth;
pub mod donation;
pub mod jwt;
pub mod password;

pub use adoption::AdoptionService;
pub use animal::AnimalService;
pub use auth::AuthService;
pub use donation::DonationService;
pub use jwt::JwtService;
