//! SessionTokens trait for issuing and hashing session tokens.
//!
//! Defined in lexilevel-core so the auth service can mint tokens without
//! coupling to a specific RNG or hash. The OS-RNG/SHA-256 adapter lives in
//! lexilevel-infra.

/// Source of opaque session tokens.
pub trait SessionTokens: Send + Sync {
    /// Generate a fresh plaintext token.
    fn generate(&self) -> String;

    /// Compute the stable hex digest stored in place of the token.
    fn hash(&self, token: &str) -> String;
}
