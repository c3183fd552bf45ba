//! Screen view-models.
//!
//! Each view-model owns its screen state and exposes intents as async
//! methods. Network calls are raced against the screen lifecycle.

mod generate_password;
mod login;
mod navigation;
mod password_strength;
mod register;
mod saved_passwords;
mod settings;

pub use generate_password::{
    GeneratePasswordEvent, GeneratePasswordState, GeneratePasswordViewModel,
};
pub use login::{LoginEvent, LoginState, LoginViewModel};
pub use navigation::{NavigationEvent, NavigationState, Navigator, Route};
pub use password_strength::{
    CheckPasswordStrengthViewModel, PasswordStrengthEvent, PasswordStrengthState,
};
pub use register::{RegisterEvent, RegisterState, RegisterViewModel};
pub use saved_passwords::{SavedPasswordsEvent, SavedPasswordsState, SavedPasswordsViewModel};
pub use settings::{SettingsEvent, SettingsState, SettingsViewModel};
