//! Cryptographic helpers.

pub mod token;
