//! Pay aggregation.

use rust_decimal::Decimal;

use crate::error::{ReportError, ReportResult};

/// Returns the total of all pay periods, or `None` if the sum does not fit
/// in a [`Decimal`]. An empty slice totals zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_reporter::pipeline::total_pay;
///
/// let pay = [Decimal::new(5000000, 2), Decimal::new(4723476, 2)];
/// assert_eq!(total_pay(&pay), Some(Decimal::new(9723476, 2)));
/// assert_eq!(total_pay(&[]), Some(Decimal::ZERO));
/// assert_eq!(total_pay(&[Decimal::MAX, Decimal::ONE]), None);
/// ```
pub fn total_pay(pay: &[Decimal]) -> Option<Decimal> {
    pay.iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount))
}

/// Totals the pay of the record at `index`, failing with a `pay` validation
/// error on overflow.
pub(crate) fn checked_total_pay(index: usize, pay: &[Decimal]) -> ReportResult<Decimal> {
    total_pay(pay).ok_or_else(|| ReportError::Validation {
        index,
        field: "pay".to_string(),
        message: "total pay overflows".to_string(),
    })
}
