//! Well-known platform result codes.
//!
//! A read-only table mapping symbolic names to their fixed 32-bit values.
//! The exception variants consume three of these at construction time
//! (`COR_E_MEMBERACCESS`, `E_POINTER`, `E_FAIL`); the rest are the
//! well-known neighbors callers are most likely to pass to
//! [`Exception::external`](crate::Exception::external) or see in native
//! diagnostics.
//!
//! Assigned codes are permanent: values here are never changed or reused.

use crate::hresult::Hresult;

/// Operation succeeded.
pub const S_OK: Hresult = Hresult::new(0x00000000);
/// Operation succeeded but returned a false/negative condition.
pub const S_FALSE: Hresult = Hresult::new(0x00000001);
/// Not implemented.
pub const E_NOTIMPL: Hresult = Hresult::new(0x80004001_u32 as i32);
/// Invalid pointer. Default code for access violations.
pub const E_POINTER: Hresult = Hresult::new(0x80004003_u32 as i32);
/// Operation aborted.
pub const E_ABORT: Hresult = Hresult::new(0x80004004_u32 as i32);
/// Unspecified failure. Default code for external exceptions.
pub const E_FAIL: Hresult = Hresult::new(0x80004005_u32 as i32);
/// Catastrophic/unexpected failure.
pub const E_UNEXPECTED: Hresult = Hresult::new(0x8000FFFF_u32 as i32);
/// Access denied.
pub const E_ACCESSDENIED: Hresult = Hresult::new(0x80070005_u32 as i32);
/// Invalid handle.
pub const E_HANDLE: Hresult = Hresult::new(0x80070006_u32 as i32);
/// Out of memory.
pub const E_OUTOFMEMORY: Hresult = Hresult::new(0x8007000E_u32 as i32);
/// One or more arguments are invalid.
pub const E_INVALIDARG: Hresult = Hresult::new(0x80070057_u32 as i32);
/// Base code for runtime-defined exceptions.
pub const COR_E_EXCEPTION: Hresult = Hresult::new(0x80131500_u32 as i32);
/// Platform does not support the requested operation.
pub const COR_E_PLATFORMNOTSUPPORTED: Hresult = Hresult::new(0x80131539_u32 as i32);
/// Member access failed. Default code for member-access exceptions.
pub const COR_E_MEMBERACCESS: Hresult = Hresult::new(0x8013151A_u32 as i32);

/// Every named code in this table, paired with its symbolic name.
const TABLE: &[(&str, Hresult)] = &[
    ("S_OK", S_OK),
    ("S_FALSE", S_FALSE),
    ("E_NOTIMPL", E_NOTIMPL),
    ("E_POINTER", E_POINTER),
    ("E_ABORT", E_ABORT),
    ("E_FAIL", E_FAIL),
    ("E_UNEXPECTED", E_UNEXPECTED),
    ("E_ACCESSDENIED", E_ACCESSDENIED),
    ("E_HANDLE", E_HANDLE),
    ("E_OUTOFMEMORY", E_OUTOFMEMORY),
    ("E_INVALIDARG", E_INVALIDARG),
    ("COR_E_EXCEPTION", COR_E_EXCEPTION),
    ("COR_E_PLATFORMNOTSUPPORTED", COR_E_PLATFORMNOTSUPPORTED),
    ("COR_E_MEMBERACCESS", COR_E_MEMBERACCESS),
];

/// Look up a code by its symbolic name.
///
/// # Examples
///
/// ```
/// use hres_core::codes;
///
/// assert_eq!(codes::lookup("E_FAIL"), Some(codes::E_FAIL));
/// assert_eq!(codes::lookup("E_BOGUS"), None);
/// ```
pub fn lookup(name: &str) -> Option<Hresult> {
    TABLE.iter().find(|(n, _)| *n == name).map(|&(_, hr)| hr)
}

/// Look up the symbolic name of a known code.
///
/// Returns `None` for codes outside this table; unknown codes are still
/// valid result codes, they simply have no name here.
pub fn symbol(hr: Hresult) -> Option<&'static str> {
    TABLE.iter().find(|&&(_, v)| v == hr).map(|&(n, _)| n)
}
