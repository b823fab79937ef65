//! Integration tests for trace file loading

use super::helpers::{fixtures_dir, temp_fixture};
use itv::trace::{Trace, TraceError};

#[test]
fn loads_object_form_fixture() {
    let trace = Trace::load(fixtures_dir().join("fib.json")).expect("should load fib.json");

    assert_eq!(trace.len(), 8);
    assert_eq!(trace.get(0).unwrap().function_name, "main");
    assert_eq!(trace.get(4).unwrap().function_name, "fibonacci");
}

#[test]
fn loads_bare_array_fixture() {
    let trace =
        Trace::load(fixtures_dir().join("array_form.json")).expect("should load array_form.json");

    assert_eq!(trace.len(), 2);
    assert_eq!(trace.get(1).unwrap().instruction, "Return(true)");
}

#[test]
fn breakpoints_field_is_ignored() {
    // fib.json carries a breakpoints list; the viewer has no breakpoint
    // capability and must not choke on it
    let trace = Trace::load(fixtures_dir().join("fib.json")).unwrap();
    assert_eq!(trace.len(), 8);
}

#[test]
fn empty_fixture_loads_as_empty_trace() {
    let trace = Trace::load(fixtures_dir().join("empty.json")).unwrap();
    assert!(trace.is_empty());
}

#[test]
fn loads_from_a_copied_temp_file() {
    let (temp_dir, path) = temp_fixture("fib.json");

    let trace = Trace::load(&path).expect("should load from temp copy");
    assert_eq!(trace.len(), 8);

    drop(temp_dir); // Cleanup
}

#[test]
fn malformed_fixture_is_a_parse_error() {
    let err = Trace::load(fixtures_dir().join("malformed.json")).unwrap_err();
    assert!(matches!(err, TraceError::Malformed(_)));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = Trace::load(fixtures_dir().join("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, TraceError::Read { .. }));
}

#[test]
fn frame_stack_preserves_bottom_first_storage_order() {
    let trace = Trace::load(fixtures_dir().join("fib.json")).unwrap();

    // Frame 6 pushed Number(10.0) then Number(1.0); storage keeps the
    // bottom of the stack at index 0
    let frame = trace.get(6).unwrap();
    assert_eq!(frame.stack, vec!["Number(10.0)", "Number(1.0)"]);
}
