//! Authentication token signing.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use blaze_common::{GatewayIdentity, SignatureRequest};

use crate::error::CredentialError;

/// Mints a bearer token proving ownership of a gateway identity.
pub trait CredentialSigner: Send + Sync {
    fn sign(
        &self,
        identity: &GatewayIdentity,
        request: &SignatureRequest<'_>,
    ) -> Result<String, CredentialError>;
}

/// Token scope requested from the gateway.
const TOKEN_SCOPE: &str = "FULL";

/// Raw Ed25519 private keys are the 32-byte seed followed by the 32-byte public key.
const ED25519_KEYPAIR_LEN: usize = 64;
const ED25519_SEED_LEN: usize = 32;

/// PKCS#8 v1 wrapper for an Ed25519 seed (RFC 8410).
const ED25519_PKCS8_PREFIX: [u8; 16] = [
    0x30, 0x2e, 0x02, 0x01, 0x00, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x04, 0x22, 0x04, 0x20,
];

#[derive(Debug, Serialize)]
struct AuthenticationClaims<'a> {
    uid: &'a str,
    sid: &'a str,
    iat: i64,
    exp: i64,
    jti: String,
    sig: String,
    scp: &'static str,
}

/// JWT signer for the gateway's authentication token format.
///
/// Ed25519 keys (base64url, 64 bytes) sign with `EdDSA`. PEM RSA keys sign
/// with `RS512`.
#[derive(Debug, Clone)]
pub struct JwtSigner {
    lifetime: Duration,
}

impl Default for JwtSigner {
    fn default() -> Self {
        Self {
            lifetime: default_lifetime(),
        }
    }
}

fn default_lifetime() -> Duration {
    Duration::days(90)
}

impl JwtSigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self { lifetime }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

impl CredentialSigner for JwtSigner {
    fn sign(
        &self,
        identity: &GatewayIdentity,
        request: &SignatureRequest<'_>,
    ) -> Result<String, CredentialError> {
        let (algorithm, key) = signing_key(identity.private_key.expose())?;

        let now = Utc::now();
        let claims = AuthenticationClaims {
            uid: &identity.app_id,
            sid: &identity.session_id,
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
            jti: Uuid::new_v4().to_string(),
            sig: request_digest(request),
            scp: TOKEN_SCOPE,
        };

        Ok(encode(&Header::new(algorithm), &claims, &key)?)
    }
}

/// Lowercase hex SHA-256 of the canonical request tuple.
pub fn request_digest(request: &SignatureRequest<'_>) -> String {
    hex::encode(Sha256::digest(request.canonical().as_bytes()))
}

fn signing_key(private_key: &str) -> Result<(Algorithm, EncodingKey), CredentialError> {
    if let Ok(raw) = URL_SAFE_NO_PAD.decode(private_key) {
        if raw.len() == ED25519_KEYPAIR_LEN {
            let mut der = Vec::with_capacity(ED25519_PKCS8_PREFIX.len() + ED25519_SEED_LEN);
            der.extend_from_slice(&ED25519_PKCS8_PREFIX);
            der.extend_from_slice(&raw[..ED25519_SEED_LEN]);
            return Ok((Algorithm::EdDSA, EncodingKey::from_ed_der(&der)));
        }
    }

    EncodingKey::from_rsa_pem(private_key.as_bytes())
        .map(|key| (Algorithm::RS512, key))
        .map_err(|e| CredentialError::InvalidKey(format!("not an Ed25519 or RSA PEM key ({})", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};

    // RFC 8032 test vector 1, seed followed by public key.
    const ED25519_KEY: &str =
        "nWGxne_9WmC6hEr0kuwsxERJxWl7MmkZcDusAxyuf2DXWpgBgrEKt9VL_tPJZAc6DuFy89qmIyWvAhpo9wdRGg";
    const ED25519_PUBLIC: &str = "11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo";

    fn identity(key: &str) -> GatewayIdentity {
        GatewayIdentity::new("app-123", "session-456", key)
    }

    fn decode_claims(token: &str) -> serde_json::Value {
        let key = DecodingKey::from_ed_components(ED25519_PUBLIC).unwrap();
        decode::<serde_json::Value>(token, &key, &Validation::new(Algorithm::EdDSA))
            .unwrap()
            .claims
    }

    #[test]
    fn test_request_digest_of_handshake() {
        assert_eq!(
            request_digest(&SignatureRequest::HANDSHAKE),
            "f837ebeb4c2981ad9c64b70d0b0d18724c76c60781b9e4bf7a582510df7ada39"
        );
    }

    #[test]
    fn test_ed25519_token_verifies() {
        let token = JwtSigner::new()
            .sign(&identity(ED25519_KEY), &SignatureRequest::HANDSHAKE)
            .unwrap();

        assert_eq!(decode_header(&token).unwrap().alg, Algorithm::EdDSA);

        let claims = decode_claims(&token);
        assert_eq!(claims["uid"], "app-123");
        assert_eq!(claims["sid"], "session-456");
        assert_eq!(claims["scp"], "FULL");
        assert_eq!(
            claims["sig"],
            "f837ebeb4c2981ad9c64b70d0b0d18724c76c60781b9e4bf7a582510df7ada39"
        );
        assert!(Uuid::parse_str(claims["jti"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_token_lifetime() {
        let signer = JwtSigner::with_lifetime(Duration::hours(1));
        let token = signer
            .sign(&identity(ED25519_KEY), &SignatureRequest::HANDSHAKE)
            .unwrap();

        let claims = decode_claims(&token);
        let iat = claims["iat"].as_i64().unwrap();
        let exp = claims["exp"].as_i64().unwrap();
        assert_eq!(exp - iat, 3600);
    }

    #[test]
    fn test_default_lifetime_is_ninety_days() {
        assert_eq!(JwtSigner::default().lifetime(), Duration::days(90));
    }

    #[test]
    fn test_each_token_is_fresh() {
        let signer = JwtSigner::new();
        let id = identity(ED25519_KEY);
        let a = decode_claims(&signer.sign(&id, &SignatureRequest::HANDSHAKE).unwrap());
        let b = decode_claims(&signer.sign(&id, &SignatureRequest::HANDSHAKE).unwrap());
        assert_ne!(a["jti"], b["jti"]);
    }

    #[test]
    fn test_malformed_key_is_rejected() {
        let result = JwtSigner::new().sign(&identity("not a key"), &SignatureRequest::HANDSHAKE);
        assert!(matches!(result, Err(CredentialError::InvalidKey(_))));
    }

    #[test]
    fn test_short_base64_key_is_rejected() {
        // Valid base64url, wrong length, and not PEM either.
        let result = JwtSigner::new().sign(&identity("AAAA"), &SignatureRequest::HANDSHAKE);
        assert!(matches!(result, Err(CredentialError::InvalidKey(_))));
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let result = JwtSigner::new().sign(&identity(""), &SignatureRequest::HANDSHAKE);
        assert!(matches!(result, Err(CredentialError::InvalidKey(_))));
    }
}
