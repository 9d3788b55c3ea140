//! Authentication and access policy for the API

pub mod policy;
pub mod token;

pub use token::{Claims, CurrentUser, JWT_EXPIRY_HOURS, auth_middleware, create_token};
