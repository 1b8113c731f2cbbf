//! Compile-fail tests for `#[derive(Zipped)]`.
//!
//! These tests verify that the derive rejects tuple structs, unit structs,
//! enums, fields that are not sequences, and unknown attributes.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#![cfg(feature = "derive")]

#[test]
fn zipped_compile_fail_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.compile_fail("tests/compile_fail/zipped_*.rs");
}
