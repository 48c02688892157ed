//! The legacy serialization boundary.
//!
//! Cross-process and cross-version exception deserialization is
//! permanently removed on this platform. Rather than leaving a
//! reachable-but-broken code path, both entry points here fail fast and
//! deterministically for every input and never partially construct an
//! exception:
//!
//! - [`Exception::from_legacy_payload`] for callers holding raw legacy
//!   payload bytes;
//! - the [`serde::Deserialize`] impl for [`Exception`], for
//!   serialization frameworks that discover the type generically.
//!
//! `Exception` intentionally does not implement `Serialize` either; the
//! capability is removed in both directions.

use serde::de::{self, Deserialize, Deserializer};

use super::Exception;
use crate::error::{Error, Result};

const REJECTION: &str = "exception deserialization is permanently unavailable on this platform";

impl Exception {
    /// Reject a legacy binary exception payload.
    ///
    /// Always fails with [`Error::DeserializationUnsupported`], for every
    /// payload. The bytes are never inspected beyond their length, which
    /// is logged for the operator chasing the rejected caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use hres_core::{Error, Exception};
    ///
    /// let err = Exception::from_legacy_payload(&[0x00, 0x01]).unwrap_err();
    /// assert!(matches!(err, Error::DeserializationUnsupported));
    /// ```
    pub fn from_legacy_payload(payload: &[u8]) -> Result<Exception> {
        log::warn!(
            "[{}] rejected legacy exception payload ({} bytes): deserialization is disabled",
            module_path!(),
            payload.len()
        );
        Err(Error::DeserializationUnsupported)
    }
}

impl<'de> Deserialize<'de> for Exception {
    /// Unconditionally fails; see the module docs.
    fn deserialize<D>(_deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        log::warn!(
            "[{}] rejected exception deserialization request: capability removed",
            module_path!()
        );
        Err(de::Error::custom(REJECTION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_payload_always_rejected() {
        let payloads: [&[u8]; 4] = [b"", b"\x00", b"not an exception", &[0xFF; 64]];
        for payload in payloads {
            let err = Exception::from_legacy_payload(payload).unwrap_err();
            assert!(matches!(err, Error::DeserializationUnsupported));
        }
    }

    #[test]
    fn test_serde_rejects_every_shape() {
        for input in ["null", "{}", "\"External\"", "[1,2,3]", "{\"message\":\"x\"}"] {
            let result = serde_json::from_str::<Exception>(input);
            let err = result.unwrap_err();
            assert!(err.to_string().contains("permanently unavailable"));
        }
    }
}
