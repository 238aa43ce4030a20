//! Blaze Common Types
//!
//! Shared types used by the Blaze gateway connector and its callers.

pub mod identity;
pub mod protocol;

pub use identity::{GatewayIdentity, PrivateKey};
pub use protocol::{
    SignatureRequest, BLAZE_HOST, BLAZE_PATH, BLAZE_SCHEME, BLAZE_SUBPROTOCOL, BLAZE_URL,
};
