//! Amounts
//!
//! Conversions between [`Money`] and exact decimal major-unit amounts, plus the
//! bare `symbol + number` rendering used on bills.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

/// Converts a money value to an exact decimal amount in major units.
pub fn to_major(money: &Money<'_, Currency>) -> Decimal {
    *money.amount()
}

/// Builds a money value from whole major units, e.g. `5` pounds.
///
/// Returns `None` if the minor-unit value does not fit in an `i64`.
pub fn from_major(major: i64, currency: &Currency) -> Option<Money<'_, Currency>> {
    let scale = 10_i64.checked_pow(currency.exponent)?;

    major
        .checked_mul(scale)
        .map(|minor| Money::from_minor(minor, currency))
}

/// Formats an amount with the currency's prefix symbol and no further formatting.
///
/// Trailing zeros are dropped, so `40.00` renders as `£40` and `7.20` as `£7.2`.
pub fn format_amount(currency: &Currency, amount: Decimal) -> String {
    format!("{}{}", currency.symbol, amount.normalize())
}

/// Formats a money value the same way as [`format_amount`].
pub fn format_money(money: &Money<'_, Currency>) -> String {
    format_amount(money.currency(), to_major(money))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};

    use super::*;

    #[test]
    fn to_major_uses_currency_exponent() {
        assert_eq!(to_major(&Money::from_minor(1050, GBP)), Decimal::new(105, 1));
    }

    #[test]
    fn to_major_is_exact_at_the_edge_of_minor_unit_range() {
        let money = Money::from_minor(i64::MAX, GBP);

        assert_eq!(to_major(&money), Decimal::new(i64::MAX, 2));
    }

    #[test]
    fn from_major_scales_to_minor_units() {
        assert_eq!(from_major(5, GBP), Some(Money::from_minor(500, GBP)));
        assert_eq!(from_major(i64::MAX, GBP), None);
    }

    #[test]
    fn format_amount_drops_trailing_zeros() {
        assert_eq!(format_amount(GBP, Decimal::new(4000, 2)), "£40");
        assert_eq!(format_amount(GBP, Decimal::new(720, 2)), "£7.2");
        assert_eq!(format_amount(GBP, Decimal::new(472, 1)), "£47.2");
    }

    #[test]
    fn format_amount_keeps_sub_minor_precision() {
        assert_eq!(format_amount(GBP, Decimal::new(1125, 3)), "£1.125");
    }

    #[test]
    fn format_money_uses_money_currency() {
        assert_eq!(format_money(&Money::from_minor(250, USD)), "$2.5");
    }

    #[test]
    fn format_zero() {
        assert_eq!(format_money(&Money::from_minor(0, GBP)), "£0");
    }
}
