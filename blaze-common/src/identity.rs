//! Identity presented to the gateway.

use std::fmt;

use serde::Deserialize;

/// Application identity used to mint gateway credentials.
///
/// Read-only for the connector. Callers build it once (usually from
/// configuration) and pass it to every connection attempt.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayIdentity {
    /// Application (bot user) ID.
    pub app_id: String,
    /// Session ID bound to the signing key.
    pub session_id: String,
    /// Private signing key, Ed25519 (base64url) or RSA (PEM).
    pub private_key: PrivateKey,
}

impl GatewayIdentity {
    pub fn new(
        app_id: impl Into<String>,
        session_id: impl Into<String>,
        private_key: impl Into<PrivateKey>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            session_id: session_id.into(),
            private_key: private_key.into(),
        }
    }
}

/// Opaque private key material. `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PrivateKey(String);

impl PrivateKey {
    /// Raw key text, for the signer only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for PrivateKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for PrivateKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_private_key() {
        let identity = GatewayIdentity::new("app-1", "session-1", "super-secret-key");
        let printed = format!("{:?}", identity);

        assert!(printed.contains("app-1"));
        assert!(printed.contains("session-1"));
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_deserialize_identity() {
        let json = r#"{
            "app_id": "b1ce2967-a534-417f-bc8c-d8c7e0b9e3f4",
            "session_id": "7c6d9e1a-0f3b-4a55-9a1e-1d2f3c4b5a69",
            "private_key": "abc_DEF-123"
        }"#;

        let identity: GatewayIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.app_id, "b1ce2967-a534-417f-bc8c-d8c7e0b9e3f4");
        assert_eq!(identity.private_key.expose(), "abc_DEF-123");
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let json = r#"{"app_id": "a", "session_id": "s"}"#;
        assert!(serde_json::from_str::<GatewayIdentity>(json).is_err());
    }
}
