//! Tax

use std::{fmt, str::FromStr};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

/// Name printed next to the tax line when none is configured.
pub const DEFAULT_TAX_LABEL: &str = "GST";

/// Errors raised while building a tax rate.
#[derive(Debug, Error, PartialEq)]
pub enum TaxRateError {
    /// Rates below zero would turn the surcharge into a discount.
    #[error("tax rate cannot be negative: {0}%")]
    Negative(Decimal),

    /// The value is not a number.
    #[error("invalid tax rate: {0}")]
    Invalid(String),
}

/// A flat percentage surcharge applied to a bill subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate {
    /// Percent points, e.g. `18` for 18%
    points: Decimal,
}

impl TaxRate {
    /// The restaurant's standard rate of 18%.
    pub const STANDARD: TaxRate = TaxRate {
        points: Decimal::from_parts(18, 0, 0, false, 0),
    };

    /// Creates a tax rate from percent points.
    ///
    /// # Errors
    ///
    /// Returns [`TaxRateError::Negative`] if `points` is below zero.
    pub fn new(points: Decimal) -> Result<Self, TaxRateError> {
        if points.is_sign_negative() && !points.is_zero() {
            return Err(TaxRateError::Negative(points));
        }

        Ok(Self {
            points: points.normalize(),
        })
    }

    /// The rate in percent points.
    pub fn points(&self) -> Decimal {
        self.points
    }

    /// The rate as a fraction of one.
    pub fn fraction(&self) -> Percentage {
        Percentage::from(self.points / Decimal::ONE_HUNDRED)
    }

    /// The tax due on an amount, without rounding.
    ///
    /// Returns `None` if the result does not fit in a [`Decimal`].
    pub fn tax_on(&self, amount: Decimal) -> Option<Decimal> {
        (self.fraction() * Decimal::ONE).checked_mul(amount)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.points)
    }
}

impl FromStr for TaxRate {
    type Err = TaxRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();

        let points = trimmed
            .parse::<Decimal>()
            .map_err(|_err| TaxRateError::Invalid(s.to_string()))?;

        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn standard_rate_is_eighteen_percent() {
        assert_eq!(TaxRate::default().points(), Decimal::from(18));
        assert_eq!(TaxRate::STANDARD.to_string(), "18%");
    }

    #[test]
    fn tax_on_is_not_rounded() -> TestResult {
        let rate = TaxRate::STANDARD;

        assert_eq!(rate.tax_on(Decimal::from(40)), Some(Decimal::new(72, 1)));
        assert_eq!(rate.tax_on(Decimal::from(1)), Some(Decimal::new(18, 2)));

        let rate = TaxRate::new(Decimal::new(125, 1))?;

        assert_eq!(rate.tax_on(Decimal::from(1)), Some(Decimal::new(125, 3)));

        Ok(())
    }

    #[test]
    fn zero_rate_is_allowed() -> TestResult {
        let rate = TaxRate::new(Decimal::ZERO)?;

        assert_eq!(rate.tax_on(Decimal::from(99)), Some(Decimal::ZERO));

        Ok(())
    }

    #[test]
    fn tax_on_reports_overflow() -> TestResult {
        let rate = TaxRate::new(Decimal::MAX)?;

        assert_eq!(rate.tax_on(Decimal::from(30_000)), None);

        Ok(())
    }

    #[test]
    fn negative_rate_is_rejected() {
        assert_eq!(
            TaxRate::new(Decimal::from(-5)),
            Err(TaxRateError::Negative(Decimal::from(-5)))
        );
    }

    #[test]
    fn parses_with_or_without_percent_sign() -> TestResult {
        assert_eq!("18".parse::<TaxRate>()?, TaxRate::STANDARD);
        assert_eq!(" 12.5 % ".parse::<TaxRate>()?.points(), Decimal::new(125, 1));
        assert!(matches!(
            "lots".parse::<TaxRate>(),
            Err(TaxRateError::Invalid(value)) if value == "lots"
        ));

        Ok(())
    }
}
