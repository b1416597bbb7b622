//! Money arithmetic for order pricing
//!
//! All monetary math runs on `rust_decimal::Decimal`; floating point never
//! enters a total. Results carry two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary values are rounded to 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

/// Validate an order or cart line quantity
pub fn validate_quantity(quantity: i32) -> Result<(), String> {
    if quantity < 1 {
        return Err(format!(
            "quantity must be a positive integer, got {quantity}"
        ));
    }
    Ok(())
}

/// Calculate a single line total
///
/// Formula: unit_price * quantity
pub fn line_total(unit_price: Decimal, quantity: i32) -> Decimal {
    (unit_price * Decimal::from(quantity))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculate the grand total over `(unit_price, quantity)` lines
///
/// Formula: sum of line totals
pub fn order_total<I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = (Decimal, i32)>,
{
    lines
        .into_iter()
        .map(|(unit_price, quantity)| line_total(unit_price, quantity))
        .sum()
}

#[cfg(test)]
mod tests;
