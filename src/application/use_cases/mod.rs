//! Use case implementations.

mod login_use_case;
mod register_use_case;
mod session_use_case;
mod vault_use_case;

pub use login_use_case::{LoginError, LoginUseCase};
pub use register_use_case::{
    REGISTERED_MESSAGE, RegisterOutcome, RegisterSuccessPolicy, RegisterUseCase,
};
pub use session_use_case::SessionUseCase;
pub use vault_use_case::{VaultError, VaultUseCase};
