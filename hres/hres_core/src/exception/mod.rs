//! The exception taxonomy.
//!
//! This module defines [`Exception`], the single immutable value type
//! behind the closed set of variants in [`ExceptionKind`]. Each variant
//! binds itself at construction to one fixed result code and default
//! message; `ExternalException` additionally accepts a caller-supplied
//! code verbatim.
//!
//! Construction is total. The only failing surface is the legacy
//! deserialization path in [`legacy`], which rejects every input.

pub mod diagnostic;
pub mod fault;
pub mod kind;
pub mod legacy;

pub use fault::{AccessFault, AccessKind};
pub use kind::ExceptionKind;

use std::sync::Arc;

use crate::hresult::Hresult;

/// An exception value carrying a fixed 32-bit result code.
///
/// Instances are immutable once constructed: the result code is set
/// exactly once (never left at zero for these variants), the message and
/// cause never change, and the stack trace is attached by the host
/// propagation mechanism before the value is shared. Causes are held
/// through [`Arc`], so a single cause may be referenced by several
/// exceptions or retained independently by logging infrastructure.
///
/// # Examples
///
/// ```
/// use hres_core::{codes, Exception, ExceptionKind};
///
/// let ex = Exception::new(ExceptionKind::MemberAccess);
/// assert_eq!(ex.hresult(), codes::COR_E_MEMBERACCESS);
/// assert_eq!(ex.message(), "Cannot access member.");
///
/// let ex = Exception::external("device unplugged", 0x8007048F_u32 as i32);
/// assert_eq!(
///     ex.to_string(),
///     "System.Runtime.InteropServices.ExternalException (0x8007048F): device unplugged"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Exception {
    kind: ExceptionKind,
    hresult: Hresult,
    message: String,
    inner: Option<Arc<Exception>>,
    stack_trace: Option<String>,
    fault: Option<AccessFault>,
}

impl Exception {
    /// Construct with the kind's default message and default result code.
    pub fn new(kind: ExceptionKind) -> Self {
        Self::with_message(kind, kind.default_message())
    }

    /// Construct with a caller-supplied message and the kind's default
    /// result code.
    ///
    /// The message is stored verbatim; an empty string is permitted and
    /// simply drops the message section from the diagnostic rendering.
    pub fn with_message(kind: ExceptionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            hresult: kind.default_hresult(),
            message: message.into(),
            inner: None,
            stack_trace: None,
            fault: None,
        }
    }

    /// Construct with a message and an inner cause.
    ///
    /// The cause is shared, not owned: it may outlive this exception or
    /// be referenced from other chains. Because causes are captured here,
    /// at construction of an immutable value, a cyclic chain cannot be
    /// formed and the recursive diagnostic rendering always terminates.
    pub fn with_cause(
        kind: ExceptionKind,
        message: impl Into<String>,
        cause: impl Into<Arc<Exception>>,
    ) -> Self {
        Self {
            inner: Some(cause.into()),
            ..Self::with_message(kind, message)
        }
    }

    /// Construct an [`ExceptionKind::External`] with an explicit result
    /// code.
    ///
    /// The code is stored verbatim with no range validation: any 32-bit
    /// value is accepted, including zero, negative values, and codes
    /// outside every known table.
    ///
    /// # Examples
    ///
    /// ```
    /// use hres_core::Exception;
    ///
    /// let ex = Exception::external("timeout", -2147023436);
    /// assert_eq!(ex.error_code(), -2147023436);
    /// ```
    pub fn external(message: impl Into<String>, code: i32) -> Self {
        Self {
            hresult: Hresult::new(code),
            ..Self::with_message(ExceptionKind::External, message)
        }
    }

    /// Attach the stack trace captured by the host propagation mechanism.
    ///
    /// The trace is written at most once, before the value is shared with
    /// any reader; this crate never captures one itself.
    pub fn with_stack_trace(mut self, trace: impl Into<String>) -> Self {
        self.stack_trace = Some(trace.into());
        self
    }

    /// Attach fault addresses captured by the host fault handler.
    ///
    /// Meaningful only for [`ExceptionKind::AccessViolation`]; the data
    /// is diagnostic-only and surfaces solely through `Debug` output.
    pub fn with_fault(mut self, fault: AccessFault) -> Self {
        self.fault = Some(fault);
        self
    }

    /// The variant of this exception.
    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    /// The stored result code.
    pub fn hresult(&self) -> Hresult {
        self.hresult
    }

    /// The stored result code as a raw `i32`.
    ///
    /// Always identical to `self.hresult().get()`; this is the
    /// interop-facing accessor name native callers expect.
    pub fn error_code(&self) -> i32 {
        self.hresult.get()
    }

    /// The exception message. May be empty; never changes after
    /// construction.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The inner cause, if any.
    pub fn inner(&self) -> Option<&Arc<Exception>> {
        self.inner.as_ref()
    }

    /// The captured stack trace, if the host attached one.
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }
}
