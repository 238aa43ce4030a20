//! WebSocket dialing.

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::SEC_WEBSOCKET_PROTOCOL;
use tokio_tungstenite::tungstenite::http::{HeaderMap, HeaderValue, Uri};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::error::TransportError;

/// Live connection to the gateway. Ownership belongs to the caller.
pub type BlazeConnection = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Everything the transport needs to open the connection.
#[derive(Debug, Clone)]
pub struct DialRequest {
    pub uri: Uri,
    pub headers: HeaderMap,
    pub subprotocols: Vec<&'static str>,
}

/// Opens a WebSocket connection for a prepared request.
#[async_trait]
pub trait GatewayDialer: Send + Sync {
    type Connection: Send;

    async fn dial(&self, request: DialRequest) -> Result<Self::Connection, TransportError>;
}

/// Dialer backed by `tokio-tungstenite` (native-tls for `wss`).
#[derive(Debug, Clone, Default)]
pub struct TungsteniteDialer;

impl TungsteniteDialer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GatewayDialer for TungsteniteDialer {
    type Connection = BlazeConnection;

    async fn dial(&self, request: DialRequest) -> Result<Self::Connection, TransportError> {
        let mut client_request = request.uri.into_client_request()?;
        let headers = client_request.headers_mut();
        headers.extend(request.headers);
        if !request.subprotocols.is_empty() {
            let protocols = HeaderValue::from_str(&request.subprotocols.join(", "))
                .map_err(tokio_tungstenite::tungstenite::Error::from)?;
            headers.insert(SEC_WEBSOCKET_PROTOCOL, protocols);
        }

        // The handshake response is not needed once the upgrade succeeded.
        let (stream, _response) = connect_async(client_request).await?;
        Ok(stream)
    }
}
