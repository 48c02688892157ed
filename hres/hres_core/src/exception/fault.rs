//! Fault-address capture for access violations.
//!
//! These values are recorded by the host runtime's fault handler for
//! post-mortem diagnostics only. They are not part of the public
//! exception contract: nothing here is serialized, and the fields
//! surface only through `Debug` output.

/// Whether the faulting access was a read or a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// The fault occurred while reading.
    Read,

    /// The fault occurred while writing.
    Write,
}

impl AccessKind {
    /// The numeric flag the host fault handler reports (0 = read,
    /// 1 = write).
    pub const fn from_flag(flag: i32) -> Self {
        match flag {
            0 => Self::Read,
            _ => Self::Write,
        }
    }
}

/// Addresses captured at the point of an access violation.
///
/// Diagnostic-only: construct with [`AccessFault::new`] and attach via
/// [`Exception::with_fault`](crate::Exception::with_fault). The fields
/// are deliberately private and read back only through `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessFault {
    /// Address of the faulting instruction.
    instruction: usize,

    /// Address that could not be accessed.
    target: usize,

    /// Whether the access was a read or a write.
    access: AccessKind,
}

impl AccessFault {
    /// Record a fault captured by the host runtime.
    pub const fn new(instruction: usize, target: usize, access: AccessKind) -> Self {
        Self {
            instruction,
            target,
            access,
        }
    }
}
