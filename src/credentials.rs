//! Login credentials and the session token they are exchanged for.
//!
//! Both types hold secrets: they are zeroized on drop and their `Debug`
//! output never includes the secret material.

use crate::error::ConfigError;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Student registration number (`ra`) and password (`senha`).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    /// Build credentials, rejecting blank fields.
    pub fn new(
        identifier: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let identifier = identifier.into();
        let secret = secret.into();

        if identifier.trim().is_empty() {
            return Err(ConfigError::Missing("ra"));
        }
        if secret.trim().is_empty() {
            return Err(ConfigError::Missing("senha"));
        }

        Ok(Self { identifier, secret })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Opaque token issued by the authentication endpoint, sent as `x-api-key`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}
