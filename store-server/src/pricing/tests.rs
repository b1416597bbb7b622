use super::*;

#[test]
fn test_line_total_multiplies_price_by_quantity() {
    let unit_price = Decimal::new(4990, 2); // 49.90
    assert_eq!(line_total(unit_price, 2), Decimal::new(9980, 2)); // 99.80
}

#[test]
fn test_line_total_quantity_one_is_identity() {
    let unit_price = Decimal::new(14990, 2); // 149.90
    assert_eq!(line_total(unit_price, 1), unit_price);
}

#[test]
fn test_order_total_two_line_order() {
    // 49.90 * 2 + 149.90 * 1 = 249.70
    let lines = vec![(Decimal::new(4990, 2), 2), (Decimal::new(14990, 2), 1)];
    assert_eq!(order_total(lines), Decimal::new(24970, 2));
}

#[test]
fn test_order_total_empty_is_zero() {
    assert_eq!(order_total(Vec::<(Decimal, i32)>::new()), Decimal::ZERO);
}

#[test]
fn test_order_total_accumulation_precision() {
    // 0.01 a thousand times must be exactly 10.00, no float drift
    let lines = vec![(Decimal::new(1, 2), 1); 1000];
    assert_eq!(order_total(lines), Decimal::new(1000, 2));
}

#[test]
fn test_line_total_rounds_half_away_from_zero() {
    // 0.125 * 1 rounds up to 0.13, not banker's 0.12
    assert_eq!(line_total(Decimal::new(125, 3), 1), Decimal::new(13, 2));
}

#[test]
fn test_validate_quantity_rejects_zero_and_negative() {
    assert!(validate_quantity(0).is_err());
    assert!(validate_quantity(-1).is_err());
    assert!(validate_quantity(i32::MIN).is_err());
}

#[test]
fn test_validate_quantity_accepts_positive() {
    assert!(validate_quantity(1).is_ok());
    assert!(validate_quantity(1000).is_ok());
}

#[test]
fn test_validate_quantity_error_names_the_value() {
    let err = validate_quantity(-3).unwrap_err();
    assert!(err.contains("-3"));
}
