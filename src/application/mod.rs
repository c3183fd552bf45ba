//! Application layer with local validation and use cases.

/// Use case implementations.
pub mod use_cases;
/// Input validation.
pub mod validation;

pub use use_cases::{
    LoginError, LoginUseCase, RegisterOutcome, RegisterSuccessPolicy, RegisterUseCase,
    SessionUseCase, VaultError, VaultUseCase,
};
pub use validation::ValidationError;
