use jsonwebtoken::{DecodingKey, EncodingKey};
use zeroize::Zeroizing;

/// Shared HMAC secret, stored as the UTF-8 bytes of the caller's string.
///
/// Any string is accepted, including the empty one; choosing a strong secret
/// is left to the caller. This value's own buffer is wiped on drop; the
/// signing and verification keys built from it keep their own copies of the
/// bytes for as long as the codec holding them lives.
#[derive(Clone)]
pub struct Secret(Zeroizing<Vec<u8>>);

impl Secret {
    pub fn new(value: &str) -> Self {
        Self(Zeroizing::new(value.as_bytes().to_vec()))
    }

    pub(crate) fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(&self.0)
    }

    pub(crate) fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.0)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        let value = Zeroizing::new(value);
        Self::new(&value)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("bytes", &"***redacted***")
            .finish()
    }
}
