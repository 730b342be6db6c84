//! Server-side login sessions.
//!
//! The plaintext token is handed to the client once; only its SHA-256 hash
//! is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// Prefix that marks a Lexilevel session token.
pub const SESSION_TOKEN_PREFIX: &str = "lxl_";

/// A persisted session, keyed by the hash of its token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token_hash: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
