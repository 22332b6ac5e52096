//! Base64 object round-trips
//!
//! Serializes a value into its binary object representation (bincode) and
//! encodes the bytes with the URL-safe, unpadded, non-wrapped Base64
//! alphabet. Encode and decode agree on that exact variant; any other
//! alphabet fails the round-trip. Failures on either direction are logged
//! and surface as the caller's default.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Serialize `value` into a Base64 string.
///
/// Serialization failures are logged and surface as `None`.
///
/// # Examples
/// ```
/// let encoded = datakit::io::encode_object(&("session", 42u32)).unwrap();
/// let back: (String, u32) = datakit::io::decode_object(&encoded).unwrap();
/// assert_eq!(back, ("session".to_string(), 42));
/// ```
pub fn encode_object<T>(value: &T) -> Option<String>
where
    T: Serialize + ?Sized,
{
    match bincode::serialize(value) {
        Ok(bytes) => Some(URL_SAFE_NO_PAD.encode(bytes)),
        Err(err) => {
            warn!("failed to encode object: {err}");
            None
        }
    }
}

/// Serialize `value` into a Base64 string, or return `default` on failure.
pub fn encode_object_or<T>(value: &T, default: &str) -> String
where
    T: Serialize + ?Sized,
{
    encode_object(value).unwrap_or_else(|| default.to_owned())
}

/// Reconstruct a value from a Base64 string produced by [`encode_object`].
///
/// Malformed Base64 and corrupt or truncated payloads are logged and
/// surface as `None`.
///
/// # Panics
///
/// Panics if `encoded` is empty; that is caller misuse, not an
/// environmental failure.
pub fn decode_object<T>(encoded: &str) -> Option<T>
where
    T: DeserializeOwned,
{
    assert!(!encoded.is_empty(), "encoded string is empty");

    let bytes = match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("failed to decode object: {err}");
            return None;
        }
    };

    match bincode::deserialize(&bytes) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("failed to decode object: {err}");
            None
        }
    }
}

/// Reconstruct a value from a Base64 string, or return `default` on failure.
pub fn decode_object_or<T>(encoded: &str, default: T) -> T
where
    T: DeserializeOwned,
{
    decode_object(encoded).unwrap_or(default)
}
