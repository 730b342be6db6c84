//! Identity provider adapters.

pub mod toolkit;

pub use toolkit::IdentityToolkitClient;
