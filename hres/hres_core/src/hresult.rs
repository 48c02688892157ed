//! The 32-bit result code carried by every exception variant.
//!
//! This module provides a thin typed wrapper around the signed 32-bit
//! status codes used by the host platform, ensuring result codes are not
//! confused with ordinary integers and rendering them in the fixed
//! diagnostic form the rest of the system expects.
//!
//! # Examples
//!
//! ```
//! use hres_core::hresult::Hresult;
//!
//! let hr = Hresult::new(-2147467259); // E_FAIL
//! assert_eq!(hr.to_string(), "0x80004005");
//! assert!(hr.is_failure());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed 32-bit platform result code.
///
/// The wrapped value is stored verbatim: any bit pattern is a valid
/// `Hresult`, including values that do not correspond to a known error.
/// The display form is locale-invariant and always `0x` followed by
/// exactly eight uppercase hex digits, so log scrapers can parse it
/// regardless of the caller's environment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hresult(i32);

impl Hresult {
    /// Wrap a raw 32-bit code.
    ///
    /// No range validation is performed; the bit pattern is kept exactly
    /// as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use hres_core::hresult::Hresult;
    ///
    /// let hr = Hresult::new(0);
    /// assert_eq!(hr.get(), 0);
    /// ```
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the raw signed 32-bit code.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether the severity bit (bit 31) is set.
    ///
    /// Failure codes have the high bit set; success codes such as `S_OK`
    /// and `S_FALSE` do not.
    pub const fn is_failure(self) -> bool {
        self.0 < 0
    }

    /// Whether this code indicates success.
    pub const fn is_success(self) -> bool {
        !self.is_failure()
    }

    /// The facility field (bits 16..=26) identifying the subsystem that
    /// defined the code.
    ///
    /// # Examples
    ///
    /// ```
    /// use hres_core::codes;
    ///
    /// // Runtime-defined codes live in facility 0x13.
    /// assert_eq!(codes::COR_E_MEMBERACCESS.facility(), 0x13);
    /// ```
    pub const fn facility(self) -> u16 {
        ((self.0 as u32) >> 16 & 0x7FF) as u16
    }

    /// The low 16 bits identifying the specific condition within the
    /// facility.
    pub const fn code(self) -> u16 {
        (self.0 as u32 & 0xFFFF) as u16
    }
}

impl From<i32> for Hresult {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<Hresult> for i32 {
    fn from(hr: Hresult) -> Self {
        hr.0
    }
}

impl fmt::Display for Hresult {
    /// Render as `0x` plus exactly eight uppercase hex digits.
    ///
    /// Negative codes render as their two's-complement bit pattern, so
    /// `-1` is `0xFFFFFFFF`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0 as u32)
    }
}

impl fmt::Debug for Hresult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hresult({})", self)
    }
}
