//! Test utilities for spanx integration tests

use spanx::DecoratedText;
use std::ops::Range;
use std::path::PathBuf;

/// Result type alias for tests
#[allow(dead_code)]
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// Path of a file under tests/fixtures/
#[allow(dead_code)]
pub fn fixture_path(group: &str, filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(group)
        .join(filename)
}

/// Decorated ranges in application order
#[allow(dead_code)]
pub fn ranges(text: &DecoratedText) -> Vec<Range<usize>> {
    text.decorations().map(|(range, _)| range.clone()).collect()
}

/// Decorated snippets in application order
#[allow(dead_code)]
pub fn snippets(text: &DecoratedText) -> Vec<&str> {
    text.decorations()
        .map(|(range, _)| &text.as_str()[range.clone()])
        .collect()
}
