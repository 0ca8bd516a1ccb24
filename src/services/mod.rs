//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod sign_up;

pub use sign_up::{SignUpError, SignUpInput, SignUpService, SignUpUseCase};
