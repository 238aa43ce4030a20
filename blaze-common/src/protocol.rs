//! Wire constants for the Blaze gateway handshake.
//!
//! # Handshake Overview
//!
//! The gateway accepts a standard secure WebSocket upgrade:
//!
//! 1. Client signs the fixed request tuple `GET /` with an empty body
//! 2. Client dials `wss://blaze.mixin.one/` with `Authorization: Bearer <token>`
//! 3. Client advertises the single sub-protocol `Mixin-Blaze-1`
//!
//! The signed tuple is not a real HTTP request. It is only the payload the
//! token commits to, so the gateway can check the token was minted for it.
//!
//! Message framing after the upgrade is not part of this crate.

/// Gateway hostname.
pub const BLAZE_HOST: &str = "blaze.mixin.one";

/// Gateway path.
pub const BLAZE_PATH: &str = "/";

/// URI scheme used for the gateway.
pub const BLAZE_SCHEME: &str = "wss";

/// Full gateway URL: scheme, `://`, host, then path.
pub const BLAZE_URL: &str = "wss://blaze.mixin.one/";

/// Sub-protocol advertised during the opening handshake.
pub const BLAZE_SUBPROTOCOL: &str = "Mixin-Blaze-1";

/// Canonical request tuple committed to by an authentication token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRequest<'a> {
    /// HTTP method, e.g. `GET`.
    pub method: &'a str,
    /// Request path, e.g. `/`.
    pub path: &'a str,
    /// Request body, empty for the handshake.
    pub body: &'a str,
}

impl SignatureRequest<'static> {
    /// The tuple signed before opening the gateway connection.
    pub const HANDSHAKE: SignatureRequest<'static> = SignatureRequest {
        method: "GET",
        path: BLAZE_PATH,
        body: "",
    };
}

impl<'a> SignatureRequest<'a> {
    pub fn new(method: &'a str, path: &'a str, body: &'a str) -> Self {
        Self { method, path, body }
    }

    /// Bytes fed to the request digest: `method ‖ path ‖ body`.
    pub fn canonical(&self) -> String {
        let mut out = String::with_capacity(self.method.len() + self.path.len() + self.body.len());
        out.push_str(self.method);
        out.push_str(self.path);
        out.push_str(self.body);
        out
    }
}
