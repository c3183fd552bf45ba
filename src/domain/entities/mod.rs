//! Domain entity definitions.

mod account;
mod identity;
mod password;
mod saved_password;
mod strength;
pub(crate) mod token;

pub use account::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use identity::SessionIdentity;
pub use password::{CharacterClasses, PasswordRequest, PasswordResponse};
pub use saved_password::{SavePasswordResponse, SavedPassword};
pub use strength::{PasswordStrengthRequest, PasswordStrengthResponse};
pub use token::{AuthToken, TokenDecodeError};
