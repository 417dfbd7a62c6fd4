//! Numeric parser properties: locale soundness and sentinel behavior.

use pretty_assertions::assert_eq;
use test_log::test;

use rust_screener::parser::{parse_decimal, parse_decimal_ascending, MISSING, MISSING_LAST};

#[test]
fn test_locale_numbers_parse_to_delocalized_value() {
    // value equals the text with thousands dots removed and the comma
    // replaced by a decimal point
    let cases = [
        ("1", 1.0),
        ("1,5", 1.5),
        ("1.234", 1234.0),
        ("1.234,56", 1234.56),
        ("1.234.567,89", 1_234_567.89),
        ("0,01%", 0.01),
        ("100%", 100.0),
        ("-3,2", -3.2),
    ];
    for (text, expected) in cases {
        assert_eq!(parse_decimal(Some(text)), expected, "input {text:?}");
    }
}

#[test]
fn test_non_numeric_inputs_parse_to_missing() {
    for text in ["", " ", "-", "%", "abc", "12a", "R$ ", "--5"] {
        assert_eq!(parse_decimal(Some(text)), MISSING, "input {text:?}");
    }
    assert_eq!(parse_decimal(None), MISSING);
}

#[test]
fn test_ascending_variant_agrees_except_on_the_sentinel() {
    let inputs = ["1,5", "1.234,56", "-3,2", "", "abc", "R$ 10,00"];
    for text in inputs {
        let primary = parse_decimal(Some(text));
        let ascending = parse_decimal_ascending(Some(text));
        if primary == MISSING {
            assert_eq!(ascending, MISSING_LAST, "input {text:?}");
        } else {
            assert_eq!(ascending, primary, "input {text:?}");
        }
    }
}
