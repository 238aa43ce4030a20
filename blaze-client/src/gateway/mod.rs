//! Gateway connection bootstrap.
//!
//! Signs an authentication token for the configured identity and opens the
//! gateway WebSocket with it. What runs over the connection afterwards is up
//! to the caller.

mod connector;
mod dialer;
mod signer;

pub use connector::{authorization_headers, connect_blaze, gateway_uri, GatewayConnector};
pub use dialer::{BlazeConnection, DialRequest, GatewayDialer, TungsteniteDialer};
pub use signer::{request_digest, CredentialSigner, JwtSigner};
