use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::claims::{self, Claims};
use crate::config::CodecConfig;
use crate::error::{TokenError, TokenResult};
use crate::secret::Secret;

const SEGMENT_COUNT: usize = 3;

/// Signs and verifies HS256 compact tokens with a bound shared secret.
///
/// All methods take `&self`; clones can be handed to any number of workers.
#[derive(Clone)]
pub struct SymmetricTokenCodec {
    config: CodecConfig,
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SymmetricTokenCodec {
    pub fn new(secret: &str) -> Self {
        Self::with_config(Secret::new(secret), CodecConfig::default())
    }

    pub fn with_config(secret: impl Into<Secret>, config: CodecConfig) -> Self {
        let secret = secret.into();

        // Header serializes to exactly {"alg":"HS256"}.
        let mut header = Header::new(Algorithm::HS256);
        header.typ = None;

        // Signature and structure only; claim policy belongs to the caller.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;

        Self {
            config,
            header,
            encoding_key: secret.encoding_key(),
            decoding_key: secret.decoding_key(),
            validation,
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Sign `payload` and stamp it with the current `iat`. Any `iat` the
    /// caller supplied is replaced.
    pub fn sign<T>(&self, payload: &T) -> TokenResult<String>
    where
        T: Serialize + ?Sized,
    {
        let mut claims = claims::to_claims(payload)?;
        let issued_at = self.config.clock.now().timestamp();
        claims::stamp_issued_at(&mut claims, issued_at);

        let token =
            encode(&self.header, &claims, &self.encoding_key).map_err(TokenError::encoding)?;
        debug!(iat = issued_at, "signed token");
        Ok(token)
    }

    /// Verify the signature and return the payload without any shape checks.
    pub fn verify(&self, token: &str) -> TokenResult<Claims> {
        match self.decode_claims(token) {
            Ok(claims) => {
                debug!("verified token successfully");
                Ok(claims)
            }
            Err(err) => {
                debug!(code = err.code(), "token verification failed");
                Err(err)
            }
        }
    }

    /// Verify like [`verify`](Self::verify), then deserialize the payload
    /// into `T`.
    pub fn verify_as<T>(&self, token: &str) -> TokenResult<T>
    where
        T: DeserializeOwned,
    {
        let claims = self.verify(token)?;
        claims::from_claims(claims)
    }

    fn decode_claims(&self, token: &str) -> TokenResult<Claims> {
        let segments = token.split('.').count();
        if segments != SEGMENT_COUNT {
            return Err(TokenError::Malformed(format!(
                "expected {SEGMENT_COUNT} segments, found {segments}"
            )));
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

impl std::fmt::Debug for SymmetricTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricTokenCodec")
            .field("config", &self.config)
            .field("secret", &"***redacted***")
            .finish()
    }
}

/// Bind `secret` for repeated signing and verification.
pub fn create_codec(secret: &str) -> SymmetricTokenCodec {
    SymmetricTokenCodec::new(secret)
}

/// One-off signing without keeping a codec around.
pub fn sign_token<T>(payload: &T, secret: &str) -> TokenResult<String>
where
    T: Serialize + ?Sized,
{
    SymmetricTokenCodec::new(secret).sign(payload)
}

/// One-off verification without keeping a codec around.
pub fn verify_token(token: &str, secret: &str) -> TokenResult<Claims> {
    SymmetricTokenCodec::new(secret).verify(token)
}

/// One-off verification that also deserializes the payload into `T`.
pub fn verify_token_as<T>(token: &str, secret: &str) -> TokenResult<T>
where
    T: DeserializeOwned,
{
    SymmetricTokenCodec::new(secret).verify_as(token)
}
