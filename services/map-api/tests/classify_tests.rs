//! Tests for coordinate format classification.

use map_api::classify::{
    classify, CoordinateClassifier, EveryLineClassifier, FirstLineClassifier,
};
use map_common::CoordinateFormat;

// ============================================================================
// Single-line grammar
// ============================================================================

#[test]
fn test_voucher_line() {
    assert_eq!(classify("-42.12344,147.43321,1"), CoordinateFormat::Voucher);
    assert_eq!(classify("-42.12344,147.43321,0"), CoordinateFormat::Voucher);
}

#[test]
fn test_no_voucher_line() {
    assert_eq!(classify("-42.12344,147.43321"), CoordinateFormat::NoVoucher);
}

#[test]
fn test_sign_is_optional() {
    assert_eq!(classify("42.12344,147.43321"), CoordinateFormat::NoVoucher);
    assert_eq!(classify("42.12344,147.43321,1"), CoordinateFormat::Voucher);
}

#[test]
fn test_invalid_lines() {
    for line in ["abc", "not,coords", "", ",", "-42.1;147.4", "-42.1,147.4,"] {
        assert_eq!(classify(line), CoordinateFormat::Invalid, "line {:?}", line);
    }
}

#[test]
fn test_voucher_flag_must_be_zero_or_one() {
    assert_eq!(classify("-42.1,147.4,2"), CoordinateFormat::Invalid);
    assert_eq!(classify("-42.1,147.4,10"), CoordinateFormat::Invalid);
    assert_eq!(classify("-42.1,147.4,yes"), CoordinateFormat::Invalid);
}

#[test]
fn test_integer_and_trailing_dot_forms() {
    assert_eq!(classify("-42,147"), CoordinateFormat::NoVoucher);
    assert_eq!(classify("-42.,147."), CoordinateFormat::NoVoucher);
    assert_eq!(classify("-42,147,1"), CoordinateFormat::Voucher);
}

#[test]
fn test_up_to_ten_decimals() {
    assert_eq!(classify("-42.1234567890,147.1234567890"), CoordinateFormat::NoVoucher);
    assert_eq!(classify("-42.12345678901,147.1"), CoordinateFormat::Invalid);
    assert_eq!(classify("-42.1,147.12345678901"), CoordinateFormat::Invalid);
}

#[test]
fn test_inner_whitespace_is_not_accepted() {
    // Spaces are stripped before classification, never by it.
    assert_eq!(classify("-42.1, 147.4"), CoordinateFormat::Invalid);
}

#[test]
fn test_non_ascii_digits_rejected() {
    assert_eq!(classify("-٤٢.1,147.4"), CoordinateFormat::Invalid);
}

// ============================================================================
// Digit-count boundaries
// ============================================================================

/// Latitudes need exactly two integer digits and longitudes exactly three.
/// This excludes valid coordinates such as `-9.5,12.3` or `-5.0,120.0`;
/// the restriction is kept as-is.
#[test]
fn test_digit_count_restriction() {
    assert_eq!(classify("-9.5,147.4"), CoordinateFormat::Invalid);
    assert_eq!(classify("-09.5,147.4"), CoordinateFormat::NoVoucher);
    assert_eq!(classify("-42.1,12.3"), CoordinateFormat::Invalid);
    assert_eq!(classify("-42.1,012.3"), CoordinateFormat::NoVoucher);
    assert_eq!(classify("-142.1,147.4"), CoordinateFormat::Invalid);
    assert_eq!(classify("-42.1,1147.4"), CoordinateFormat::Invalid);
    assert_eq!(classify("-42.1,-147.4"), CoordinateFormat::Invalid);
}

// ============================================================================
// List classifiers
// ============================================================================

#[test]
fn test_first_line_classifier_ignores_later_lines() {
    let result = FirstLineClassifier.classify("-42.1,147.4\nnonsense\n-41.3,145.4,1");
    assert_eq!(result.format, CoordinateFormat::NoVoucher);
    assert_eq!(result.line, "-42.1,147.4");
}

#[test]
fn test_first_line_classifier_reports_offending_line() {
    let result = FirstLineClassifier.classify("not,coords\n-42.1,147.4");
    assert_eq!(result.format, CoordinateFormat::Invalid);
    assert_eq!(result.line, "not,coords");
}

#[test]
fn test_first_line_classifier_empty_input() {
    let result = FirstLineClassifier.classify("");
    assert_eq!(result.format, CoordinateFormat::Invalid);
    assert_eq!(result.line, "");
}

#[test]
fn test_every_line_classifier_accepts_uniform_list() {
    let result = EveryLineClassifier.classify("-42.1,147.4,1\n-41.3,145.4,0\n");
    assert_eq!(result.format, CoordinateFormat::Voucher);
    assert_eq!(result.line, "-42.1,147.4,1");
}

#[test]
fn test_every_line_classifier_rejects_mixed_list() {
    let result = EveryLineClassifier.classify("-42.1,147.4,1\n-41.3,145.4\n-40.1,144.2,0");
    assert_eq!(result.format, CoordinateFormat::Invalid);
    assert_eq!(result.line, "-41.3,145.4");
}

#[test]
fn test_every_line_classifier_rejects_bad_first_line() {
    let result = EveryLineClassifier.classify("abc\n-41.3,145.4");
    assert_eq!(result.format, CoordinateFormat::Invalid);
    assert_eq!(result.line, "abc");
}
