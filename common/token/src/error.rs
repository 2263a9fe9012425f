use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

pub type TokenResult<T> = Result<T, TokenError>;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to encode token payload: {0}")]
    Encoding(String),
    #[error("malformed token: {0}")]
    Malformed(String),
    #[error("token signature mismatch")]
    SignatureMismatch,
    #[error("verified claims do not match the requested shape: {0}")]
    InvalidClaims(String),
}

impl TokenError {
    /// Stable diagnostic code for logs and metric labels.
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Encoding(_) => "TOKEN_ENCODING",
            TokenError::Malformed(_) => "TOKEN_MALFORMED",
            TokenError::SignatureMismatch => "TOKEN_SIGNATURE",
            TokenError::InvalidClaims(_) => "TOKEN_CLAIMS",
        }
    }

    /// Map a failure raised while building a token.
    pub(crate) fn encoding(err: jsonwebtoken::errors::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

/// Errors surfaced by `jsonwebtoken::decode`. Expiry, audience and issuer
/// checks are switched off by the codec, so anything other than a bad
/// signature means the token itself could not be read.
impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        match value.kind() {
            ErrorKind::InvalidSignature => Self::SignatureMismatch,
            ErrorKind::InvalidAlgorithm => {
                Self::Malformed("token header does not declare HS256".to_string())
            }
            _ => Self::Malformed(value.to_string()),
        }
    }
}
