//! Shared domain types for Lexilevel.
//!
//! This crate contains the domain types used across the workspace:
//! proficiency levels, assessment results, history records, users,
//! sessions, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod assessment;
pub mod config;
pub mod error;
pub mod history;
pub mod level;
pub mod session;
pub mod user;
