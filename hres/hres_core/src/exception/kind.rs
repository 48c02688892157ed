//! The closed set of exception variants.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codes;
use crate::hresult::Hresult;
use crate::resources::ResourceKey;

/// One concrete exception kind within the closed hierarchy.
///
/// Each kind binds a fixed default result code and default message; the
/// binding never changes after the kind is chosen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExceptionKind {
    /// Access to a member failed because it is removed, private, or
    /// otherwise unreachable.
    MemberAccess,

    /// An access violation that may have corrupted the process.
    AccessViolation,

    /// A failure reported by native/interop code or structured exception
    /// handling.
    External,
}

impl ExceptionKind {
    /// The fixed default result code for this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use hres_core::{codes, ExceptionKind};
    ///
    /// assert_eq!(ExceptionKind::External.default_hresult(), codes::E_FAIL);
    /// ```
    pub const fn default_hresult(self) -> Hresult {
        match self {
            Self::MemberAccess => codes::COR_E_MEMBERACCESS,
            Self::AccessViolation => codes::E_POINTER,
            Self::External => codes::E_FAIL,
        }
    }

    /// The default message for this kind, from the resource table.
    pub const fn default_message(self) -> &'static str {
        self.resource_key().message()
    }

    /// The resource key this kind's default message is looked up under.
    pub const fn resource_key(self) -> ResourceKey {
        match self {
            Self::MemberAccess => ResourceKey::ArgAccessException,
            Self::AccessViolation => ResourceKey::ArgAccessViolationException,
            Self::External => ResourceKey::ArgExternalException,
        }
    }

    /// The fully qualified type name rendered in diagnostics.
    ///
    /// These are the host runtime's names, kept verbatim so the
    /// diagnostic output stays parseable by fixtures and log scrapers
    /// that already consume the native format.
    pub const fn qualified_name(self) -> &'static str {
        match self {
            Self::MemberAccess => "System.MemberAccessException",
            Self::AccessViolation => "System.AccessViolationException",
            Self::External => "System.Runtime.InteropServices.ExternalException",
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}
