//! # Hres Core
//!
//! `hres_core` is the exception taxonomy and native result-code bridge
//! used at the host-runtime interop boundary. It standardizes two things
//! and nothing more:
//!
//! 1. **Construction** of a closed set of exception variants, each bound
//!    at construction time to a fixed 32-bit platform result code
//!    (HRESULT) and a default message, with the external variant
//!    accepting an explicit caller-supplied code verbatim.
//!
//! 2. **Diagnostic rendering** of those values into the fixed textual
//!    form consumed by log scrapers and test fixtures:
//!    `Name (0xXXXXXXXX): message ---> inner…` plus an optional verbatim
//!    stack trace.
//!
//! Propagation, unwinding, and trace capture belong to the host runtime.
//! Legacy binary serialization of exceptions is permanently removed: the
//! deserialization surfaces exist only to reject every input (see
//! [`exception::legacy`]).
//!
//! Values are immutable after construction, with causes shared through
//! [`std::sync::Arc`], so distinct instances may be constructed and
//! formatted concurrently without coordination.
//!
//! ## Crate Structure
//!
//! - **error**: the crate error type (one failure mode: rejected legacy
//!   deserialization)
//! - **hresult**: the typed 32-bit result code and its invariant hex
//!   rendering
//! - **codes**: well-known named result codes and symbolic lookup
//! - **resources**: default message strings per variant
//! - **exception**: the [`Exception`] value, its variants, construction
//!   protocol, diagnostic `Display`, and the rejecting serialization
//!   boundary
//!
//! ## Examples
//!
//! ```
//! use hres_core::{codes, Exception, ExceptionKind};
//!
//! let root = Exception::external("device not ready", 0x80070015_u32 as i32);
//! let outer = Exception::with_cause(ExceptionKind::MemberAccess, "proxy call failed", root);
//!
//! assert_eq!(outer.hresult(), codes::COR_E_MEMBERACCESS);
//! assert_eq!(
//!     outer.to_string(),
//!     "System.MemberAccessException (0x8013151A): proxy call failed ---> \
//!      System.Runtime.InteropServices.ExternalException (0x80070015): device not ready"
//! );
//! ```

pub mod codes;
pub mod error;
pub mod exception;
pub mod hresult;
pub mod resources;

// Re-export key types for convenience
pub use error::{Error, Result};
pub use exception::{AccessFault, AccessKind, Exception, ExceptionKind};
pub use hresult::Hresult;
pub use resources::ResourceKey;
