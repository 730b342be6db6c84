//! Business logic services (use cases).
//!
//! Services orchestrate the pure assessment functions, repository calls,
//! and identity provider calls. They depend on traits (ports) -- never on
//! concrete infrastructure implementations.

pub mod assessment;
pub mod auth;
pub mod token;
