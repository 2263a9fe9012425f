//! HS256 compact tokens signed with a shared secret.
//!
//! Thin layer over `jsonwebtoken`: the codec stamps an `iat` claim on sign
//! and checks only signature and structure on verify. Expiry, audience and
//! issuer policy stay with the caller.

pub mod claims;
pub mod codec;
pub mod config;
pub mod error;
pub mod secret;

pub use claims::{issued_at, Claims, ISSUED_AT};
pub use codec::{
    create_codec, sign_token, verify_token, verify_token_as, SymmetricTokenCodec,
};
pub use config::{Clock, CodecConfig};
pub use error::{TokenError, TokenResult};
pub use secret::Secret;
