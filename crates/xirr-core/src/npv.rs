//! Net present value of a normalized cash flow schedule.

use crate::daycount::{year_fraction, NormalizedSchedule};

/// Net present value of a normalized schedule at the given rate.
///
/// Each amount is discounted back to the date of the first cash flow:
/// an amount at year fraction `t` contributes `amount / (1 + rate)^t`.
/// At rate 0 this is the plain sum of amounts.
///
/// The discount factor is accumulated incrementally: each entry
/// multiplies the running factor by `(1 + rate)^(t_i - t_{i-1})` rather
/// than recomputing the absolute power from offset zero. Recomputing
/// from scratch drifts for large exponents and does not reproduce this
/// function bit-for-bit, so the incremental form is part of the
/// contract, not an optimization to be simplified away.
///
/// Rates at or below -1 are not guarded: the fractional power of a
/// non-positive base yields NaN, which propagates to the caller. The
/// rate search terminates on it through its sign-inconsistency path.
///
/// # Example
///
/// ```rust
/// use xirr_core::daycount::NormalizedSchedule;
/// use xirr_core::npv::net_present_value;
/// use xirr_core::types::{CashFlow, CashFlowSchedule, Date};
///
/// let schedule: CashFlowSchedule = [
///     CashFlow::new(Date::from_ymd(2020, 1, 1).unwrap(), -1000.0),
///     CashFlow::new(Date::from_ymd(2021, 1, 1).unwrap(), 1100.0),
/// ]
/// .into_iter()
/// .collect();
/// let normalized = NormalizedSchedule::from_schedule(&schedule).unwrap();
///
/// // At 0% the NPV is the plain sum.
/// assert!((net_present_value(0.0, &normalized) - 100.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn net_present_value(rate: f64, schedule: &NormalizedSchedule) -> f64 {
    let rate_plus_one = 1.0 + rate;
    let mut discount = 1.0;
    let mut last_fraction = 0.0;
    let mut total = 0.0;

    for &(day_offset, amount) in schedule.entries() {
        let fraction = year_fraction(day_offset);
        discount *= rate_plus_one.powf(fraction - last_fraction);
        last_fraction = fraction;
        total += amount / discount;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CashFlow, CashFlowSchedule, Date};
    use approx::assert_relative_eq;

    fn normalized(flows: &[(&str, f64)]) -> NormalizedSchedule {
        let schedule: CashFlowSchedule = flows
            .iter()
            .map(|&(d, a)| CashFlow::new(Date::parse(d).unwrap(), a))
            .collect();
        NormalizedSchedule::from_schedule(&schedule).unwrap()
    }

    #[test]
    fn test_zero_rate_is_plain_sum() {
        let schedule = normalized(&[
            ("2015-06-11", -1000.0),
            ("2015-07-21", -9000.0),
            ("2015-10-17", -3000.0),
            ("2018-06-10", 20000.0),
        ]);

        assert_relative_eq!(net_present_value(0.0, &schedule), 7000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_one_year_discount() {
        // 1100 one 365-day year out at 10%: discounted to exactly 1000.
        let schedule = normalized(&[("2019-01-01", -1000.0), ("2020-01-01", 1100.0)]);

        assert_relative_eq!(net_present_value(0.10, &schedule), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_entry_is_rate_independent() {
        // One flow at offset 0: the exponent is 0 for every rate.
        let schedule = normalized(&[("2020-06-15", -500.0)]);

        for rate in [0.0, 0.5, 5.0, 10.0] {
            assert_relative_eq!(net_present_value(rate, &schedule), -500.0);
        }
    }

    #[test]
    fn test_npv_decreases_with_rate_for_future_inflows() {
        let schedule = normalized(&[("2020-01-01", -1000.0), ("2023-01-01", 2000.0)]);

        let low = net_present_value(0.05, &schedule);
        let high = net_present_value(0.25, &schedule);

        assert!(low > high);
    }

    #[test]
    fn test_rate_below_minus_one_yields_nan() {
        let schedule = normalized(&[("2020-01-01", -1000.0), ("2021-06-01", 1500.0)]);

        assert!(net_present_value(-2.0, &schedule).is_nan());
    }

    #[test]
    fn test_homogeneous_in_amounts() {
        let base = normalized(&[
            ("2020-01-01", -1000.0),
            ("2021-01-01", 600.0),
            ("2022-01-01", 600.0),
        ]);
        let scaled = normalized(&[
            ("2020-01-01", -3500.0),
            ("2021-01-01", 2100.0),
            ("2022-01-01", 2100.0),
        ]);

        let rate = 0.08;
        assert_relative_eq!(
            net_present_value(rate, &scaled),
            3.5 * net_present_value(rate, &base),
            epsilon = 1e-9
        );
    }
}
