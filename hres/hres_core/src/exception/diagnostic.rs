//! Diagnostic rendering of exception values.
//!
//! The format is fixed and parsed by downstream log scrapers and test
//! fixtures, so it must be reproduced byte-for-byte (trace content aside,
//! which is environment-dependent):
//!
//! ```text
//! <qualified-type-name> (0xXXXXXXXX)[: <message>][ ---> <inner>…][\n<trace>]
//! ```
//!
//! - the code is always eight uppercase hex digits, locale-invariant;
//! - an empty message drops the `": "` section entirely;
//! - the inner cause is rendered by the same contract, recursively,
//!   nesting the full diagnostic of the whole chain;
//! - the trace is appended verbatim after a newline.
//!
//! Rendering has no failure mode and is idempotent: every absent section
//! is simply omitted.

use std::fmt;

use super::Exception;

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind().qualified_name(), self.hresult())?;

        if !self.message().is_empty() {
            write!(f, ": {}", self.message())?;
        }

        if let Some(inner) = self.inner() {
            // Same contract applied to the cause; chains are acyclic by
            // construction, so this terminates.
            write!(f, " ---> {}", inner)?;
        }

        if let Some(trace) = self.stack_trace() {
            write!(f, "\n{}", trace)?;
        }

        Ok(())
    }
}
