//! Session tokens from the OS CSPRNG, stored as SHA-256 digests.
//!
//! Implements the `SessionTokens` trait from `lexilevel-core`.

use aes_gcm::aead::{OsRng, rand_core::RngCore};
use sha2::{Digest, Sha256};

use lexilevel_core::service::token::SessionTokens;
use lexilevel_types::session::SESSION_TOKEN_PREFIX;

/// `lxl_` followed by 32 random bytes in lowercase hex.
pub struct RandomSessionTokens;

impl RandomSessionTokens {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomSessionTokens {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTokens for RandomSessionTokens {
    fn generate(&self) -> String {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        format!(
            "{SESSION_TOKEN_PREFIX}{}",
            bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
        )
    }

    fn hash(&self, token: &str) -> String {
        let digest = Sha256::digest(token.as_bytes());
        format!("{:x}", digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_format() {
        let token = RandomSessionTokens::new().generate();
        assert!(token.starts_with("lxl_"));
        assert_eq!(token.len(), 4 + 64);
        assert!(token[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens = RandomSessionTokens::new();
        assert_ne!(tokens.generate(), tokens.generate());
    }

    #[test]
    fn test_hash_known_value() {
        assert_eq!(
            RandomSessionTokens::new().hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
