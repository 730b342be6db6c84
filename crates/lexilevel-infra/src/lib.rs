//! Infrastructure layer for Lexilevel.
//!
//! Contains implementations of the ports defined in `lexilevel-core`:
//! SQLite storage, the Identity Toolkit REST client, session token
//! generation, and configuration loading.

pub mod config;
pub mod crypto;
pub mod filesystem;
pub mod identity;
pub mod sqlite;
