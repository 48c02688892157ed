//! Integration tests pinning the diagnostic output format.
//!
//! The rendered form is parsed by downstream log scrapers, so these are
//! byte-for-byte fixtures, not substring spot checks.

use hres_core::{Exception, ExceptionKind};

#[test]
fn test_full_fixture_with_message() {
    let ex = Exception::external("The RPC server is unavailable.", 0x800706BA_u32 as i32);
    assert_eq!(
        ex.to_string(),
        "System.Runtime.InteropServices.ExternalException (0x800706BA): \
         The RPC server is unavailable."
    );
}

#[test]
fn test_default_fixtures_per_kind() {
    assert_eq!(
        Exception::new(ExceptionKind::MemberAccess).to_string(),
        "System.MemberAccessException (0x8013151A): Cannot access member."
    );
    assert_eq!(
        Exception::new(ExceptionKind::AccessViolation).to_string(),
        "System.AccessViolationException (0x80004003): Attempted to read or write \
         protected memory. This is often an indication that other memory is corrupt."
    );
    assert_eq!(
        Exception::new(ExceptionKind::External).to_string(),
        "System.Runtime.InteropServices.ExternalException (0x80004005): \
         External component has thrown an exception."
    );
}

#[test]
fn test_hex_rendering_fixtures() {
    assert_eq!(
        Exception::external("", -1).to_string(),
        "System.Runtime.InteropServices.ExternalException (0xFFFFFFFF)"
    );
    assert_eq!(
        Exception::external("", 0).to_string(),
        "System.Runtime.InteropServices.ExternalException (0x00000000)"
    );
    assert_eq!(
        Exception::external("", 255).to_string(),
        "System.Runtime.InteropServices.ExternalException (0x000000FF)"
    );
}

#[test]
fn test_empty_message_omits_separator() {
    let rendered = Exception::external("", 7).to_string();
    assert!(!rendered.contains(": "));
    assert!(rendered.ends_with("(0x00000007)"));
}

#[test]
fn test_three_level_chain_fixture() {
    let c = Exception::external("io failure", 0x8007001F_u32 as i32);
    let b = Exception::with_cause(ExceptionKind::External, "wrapper", c);
    let a = Exception::with_cause(ExceptionKind::MemberAccess, "call failed", b);

    assert_eq!(
        a.to_string(),
        "System.MemberAccessException (0x8013151A): call failed ---> \
         System.Runtime.InteropServices.ExternalException (0x80004005): wrapper ---> \
         System.Runtime.InteropServices.ExternalException (0x8007001F): io failure"
    );
}

#[test]
fn test_chain_contains_full_inner_rendering() {
    let c = Exception::external("root", 1);
    let c_rendered = c.to_string();
    let b = Exception::with_cause(ExceptionKind::External, "mid", c);
    let b_rendered = b.to_string();
    let a = Exception::with_cause(ExceptionKind::External, "top", b);
    let a_rendered = a.to_string();

    let after_arrow = a_rendered
        .split_once(" ---> ")
        .expect("chain separator present")
        .1;
    assert_eq!(after_arrow, b_rendered);
    assert!(b_rendered.contains(&c_rendered));
}

#[test]
fn test_trace_fixture() {
    let ex = Exception::with_message(ExceptionKind::External, "boom")
        .with_stack_trace("   at Native.Call()\n   at Bridge.Invoke()");
    assert_eq!(
        ex.to_string(),
        "System.Runtime.InteropServices.ExternalException (0x80004005): boom\n   \
         at Native.Call()\n   at Bridge.Invoke()"
    );
}

#[test]
fn test_trace_follows_chain() {
    let inner = Exception::external("inner", 2);
    let ex = Exception::with_cause(ExceptionKind::External, "outer", inner)
        .with_stack_trace("   at frame()");
    let rendered = ex.to_string();
    let newline = rendered.find('\n').expect("trace separator present");
    assert!(rendered[..newline].contains(" ---> "));
    assert_eq!(&rendered[newline..], "\n   at frame()");
}

#[test]
fn test_formatting_is_idempotent() {
    let ex = Exception::with_cause(
        ExceptionKind::AccessViolation,
        "unstable?",
        Exception::external("", -1),
    )
    .with_stack_trace("   at fault()");
    let first = ex.to_string();
    let second = ex.to_string();
    assert_eq!(first, second);
}
