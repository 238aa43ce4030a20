//! Blaze gateway connector.
//!
//! Opens an authenticated WebSocket to the Mixin Blaze gateway and hands the
//! live stream back to the caller.

pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;

pub use error::{ConnectError, CredentialError, Result, TransportError};
pub use gateway::{
    connect_blaze, BlazeConnection, CredentialSigner, DialRequest, GatewayConnector,
    GatewayDialer, JwtSigner, TungsteniteDialer,
};
