//! Public contract of the Roman numeral codec and the left-to-right evaluator.

use calcdeck::calculator::{NumberFormat, calculate, tokenize};
use calcdeck::{CalcError, decode_roman, encode_roman, evaluate_expression};

#[test]
fn test_roman_round_trip_covers_whole_domain() {
    for n in 1..=3999 {
        let encoded = encode_roman(n).unwrap();
        assert_eq!(i64::from(decode_roman(&encoded).unwrap()), n);
        assert_eq!(encode_roman(i64::from(decode_roman(&encoded).unwrap())).unwrap(), encoded);
    }
}

#[test]
fn test_roman_rejects_out_of_range() {
    for n in [-3999, -1, 0, 4000, 10_000] {
        assert!(matches!(encode_roman(n), Err(CalcError::OutOfRange(_))));
    }
}

#[test]
fn test_roman_reference_values() {
    assert_eq!(encode_roman(1994).unwrap(), "MCMXCIV");
    assert_eq!(encode_roman(3999).unwrap(), "MMMCMXCIX");
    assert_eq!(encode_roman(4).unwrap(), "IV");
    assert_eq!(encode_roman(9).unwrap(), "IX");

    assert_eq!(decode_roman("MCMXCIV").unwrap(), 1994);
    assert_eq!(decode_roman("iv").unwrap(), 4);
    assert!(matches!(decode_roman("IIII"), Err(CalcError::InvalidFormat(_))));
}

#[test]
fn test_evaluator_reference_values() {
    assert_eq!(evaluate_expression(&["2", "+", "3", "*", "4"]).unwrap(), 20.0);
    assert_eq!(
        evaluate_expression(&["10", "/", "0"]),
        Err(CalcError::DivisionByZero)
    );
    assert_eq!(evaluate_expression(&["5"]).unwrap(), 5.0);
}

#[test]
fn test_evaluator_rejects_malformed_streams() {
    assert!(matches!(
        evaluate_expression(&["1", "+"]),
        Err(CalcError::MalformedExpression(_))
    ));
    assert!(matches!(
        evaluate_expression(&["1", "^", "2"]),
        Err(CalcError::MalformedExpression(_))
    ));
}

#[test]
fn test_text_pipeline_formats_results() {
    let format = NumberFormat::default();
    assert_eq!(calculate("0.1 + 0.2", &format).display(), "0.3");
    assert_eq!(calculate("10 / 4", &format).display(), "2.5");
    assert_eq!(calculate("2+3*4", &format).display(), "20");
}

#[test]
fn test_calls_are_idempotent() {
    let tokens = tokenize("7 - 2 / 5").unwrap();
    let first = evaluate_expression(&tokens);
    assert_eq!(first, evaluate_expression(&tokens));
    assert_eq!(first.unwrap(), 1.0);

    assert_eq!(encode_roman(2024), encode_roman(2024));
    assert_eq!(decode_roman("XLII"), decode_roman("XLII"));
}
