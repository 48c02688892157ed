//! Default message strings for the exception variants.
//!
//! A read-only table mapping symbolic resource keys to the default
//! message each variant carries when constructed without one. The
//! strings match the host runtime's resource values byte-for-byte so
//! default-constructed exceptions render identically on both sides of
//! the interop boundary.

use std::fmt;

/// Symbolic key into the default-message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    /// Default message for member-access failures.
    ArgAccessException,

    /// Default message for access violations.
    ArgAccessViolationException,

    /// Default message for external/native failures.
    ArgExternalException,
}

impl ResourceKey {
    /// The symbolic key string, as named in the host runtime's resource
    /// table.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ArgAccessException => "Arg_AccessException",
            Self::ArgAccessViolationException => "Arg_AccessViolationException",
            Self::ArgExternalException => "Arg_ExternalException",
        }
    }

    /// The default message text for this key.
    pub const fn message(self) -> &'static str {
        match self {
            Self::ArgAccessException => "Cannot access member.",
            Self::ArgAccessViolationException => {
                "Attempted to read or write protected memory. \
                 This is often an indication that other memory is corrupt."
            }
            Self::ArgExternalException => "External component has thrown an exception.",
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(ResourceKey::ArgAccessException.key(), "Arg_AccessException");
        assert_eq!(
            ResourceKey::ArgExternalException.to_string(),
            "Arg_ExternalException"
        );
    }

    #[test]
    fn test_messages_are_nonempty() {
        for key in [
            ResourceKey::ArgAccessException,
            ResourceKey::ArgAccessViolationException,
            ResourceKey::ArgExternalException,
        ] {
            assert!(!key.message().is_empty());
        }
    }

    #[test]
    fn test_external_default_text() {
        assert_eq!(
            ResourceKey::ArgExternalException.message(),
            "External component has thrown an exception."
        );
    }
}
