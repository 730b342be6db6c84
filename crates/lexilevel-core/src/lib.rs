//! Business logic and repository trait definitions for Lexilevel.
//!
//! The text analysis and recommendation functions are pure and synchronous.
//! Services wire them to the "ports" (repository and identity traits) that
//! the infrastructure layer implements. This crate depends only on
//! `lexilevel-types` -- never on `lexilevel-infra` or any database/IO crate.

pub mod analysis;
pub mod identity;
pub mod recommend;
pub mod repository;
pub mod service;
