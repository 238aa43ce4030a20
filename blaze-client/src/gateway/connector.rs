//! Authenticated gateway connection bootstrap.

use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::tungstenite::http::{HeaderMap, HeaderValue, Uri};

use blaze_common::{GatewayIdentity, SignatureRequest, BLAZE_SUBPROTOCOL, BLAZE_URL};

use crate::error::{CredentialError, Result};

use super::dialer::{BlazeConnection, DialRequest, GatewayDialer, TungsteniteDialer};
use super::signer::{CredentialSigner, JwtSigner};

/// Opens authenticated connections to the gateway.
///
/// Each call to [`connect`](Self::connect) signs a fresh token and performs
/// one handshake. No retries, no shared mutable state.
#[derive(Debug, Clone)]
pub struct GatewayConnector<S, D> {
    signer: S,
    dialer: D,
}

impl Default for GatewayConnector<JwtSigner, TungsteniteDialer> {
    fn default() -> Self {
        Self::new(JwtSigner::new(), TungsteniteDialer::new())
    }
}

impl<S, D> GatewayConnector<S, D>
where
    S: CredentialSigner,
    D: GatewayDialer,
{
    pub fn new(signer: S, dialer: D) -> Self {
        Self { signer, dialer }
    }

    /// Sign a handshake token for `identity` and dial the gateway.
    ///
    /// A signing failure returns before anything touches the network.
    pub async fn connect(&self, identity: &GatewayIdentity) -> Result<D::Connection> {
        tracing::debug!(app_id = %identity.app_id, "Signing gateway credential");
        let token = self.signer.sign(identity, &SignatureRequest::HANDSHAKE)?;

        let request = DialRequest {
            uri: gateway_uri(),
            headers: authorization_headers(&token)?,
            subprotocols: vec![BLAZE_SUBPROTOCOL],
        };

        tracing::debug!(uri = %request.uri, subprotocol = BLAZE_SUBPROTOCOL, "Dialing gateway");
        Ok(self.dialer.dial(request).await?)
    }
}

/// Connect to the gateway with the default token signer and WebSocket dialer.
pub async fn connect_blaze(identity: &GatewayIdentity) -> Result<BlazeConnection> {
    GatewayConnector::default().connect(identity).await
}

/// The fixed gateway endpoint.
pub fn gateway_uri() -> Uri {
    Uri::from_static(BLAZE_URL)
}

/// Header set carrying the bearer token, and nothing else.
pub fn authorization_headers(token: &str) -> std::result::Result<HeaderMap, CredentialError> {
    let mut headers = HeaderMap::with_capacity(1);
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
    Ok(headers)
}
