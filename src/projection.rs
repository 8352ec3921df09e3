//! Fixed-rate annual compounding and the returns derived from it.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const ROOT_TOLERANCE: Decimal = dec!(0.00000000000000000001);
const MAX_ROOT_ITERATIONS: u32 = 500;

/// Outcome of holding a position for a number of years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Amount paid up front.
    pub principal: Decimal,
    pub future_value: Decimal,
    /// `future_value - principal`.
    pub profit: Decimal,
    /// Total return over the whole period, in percent.
    pub period_return_pct: Decimal,
    /// Constant yearly rate that turns `principal` into `future_value`, in percent.
    pub annualized_return_pct: Decimal,
}

impl Projection {
    /// Derives profit and returns from a principal and the value it reaches after `years`.
    ///
    /// Returns are reported as zero when the principal is not positive (and the
    /// annualized one as well when `years` is zero).
    pub fn from_values(principal: Decimal, future_value: Decimal, years: u32) -> Self {
        let profit = future_value - principal;

        let period_return_pct = if principal > Decimal::ZERO {
            saturating_ratio(profit, principal)
                .checked_mul(Decimal::ONE_HUNDRED)
                .unwrap_or(Decimal::MAX)
        } else {
            log::warn!("principal {principal} is not positive, reporting zero period return");
            Decimal::ZERO
        };

        let annualized_return_pct = if principal > Decimal::ZERO && years > 0 {
            annualized_rate(saturating_ratio(future_value, principal), years)
                .checked_mul(Decimal::ONE_HUNDRED)
                .unwrap_or(Decimal::MAX)
        } else {
            Decimal::ZERO
        };

        Self {
            principal,
            future_value,
            profit,
            period_return_pct,
            annualized_return_pct,
        }
    }
}

/// `numerator / denominator`, clamped to `Decimal::MAX` when the quotient leaves the range.
fn saturating_ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or_else(|| {
        log::warn!("{numerator} / {denominator} overflows, clamping the return");
        Decimal::MAX
    })
}

/// Grows `base` at `annual_rate` (a fraction, 0.1475 for 14.75%) for `years`.
///
/// Inputs accepted by [`AcquisitionInput::validate`](crate::AcquisitionInput::validate)
/// and [`SimulatorConfig::validate`](crate::SimulatorConfig::validate) stay far
/// below the `Decimal` range.
pub fn grow(base: Decimal, annual_rate: Decimal, years: u32) -> Decimal {
    base * (Decimal::ONE + annual_rate).powu(years.into())
}

/// Projects `principal` invested at `annual_rate` for `years`.
pub fn project(principal: Decimal, annual_rate: Decimal, years: u32) -> Projection {
    let future_value = grow(principal, annual_rate, years);
    let projection = Projection::from_values(principal, future_value, years);
    log::debug!(
        "projected {principal} at {annual_rate} for {years}y: fv {future_value}, period {}%",
        projection.period_return_pct
    );
    projection
}

/// Annual rate `r` (as a fraction) such that `(1 + r)^years = growth`.
///
/// The `years`-th root is found with Newton's method started above the root,
/// so the iterates decrease monotonically towards it. The start is the lower of
/// `1 + (growth - 1) / years` (Bernoulli's inequality) and the smallest power of
/// two whose `years`-th power reaches `growth`, which keeps every intermediate
/// power inside `Decimal` range. Returns zero for `years` zero or a
/// non-positive `growth`.
pub fn annualized_rate(growth: Decimal, years: u32) -> Decimal {
    if years == 0 || growth <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if years == 1 {
        return growth - Decimal::ONE;
    }

    let n = Decimal::from(years);
    let n_minus_one = Decimal::from(years - 1);
    let mut root = (Decimal::ONE + (growth - Decimal::ONE) / n).min(power_of_two_bound(growth, years));

    for i in 0..MAX_ROOT_ITERATIONS {
        let next = (n_minus_one * root + growth / root.powu((years - 1).into())) / n;
        let delta = (root - next).abs();
        root = next;
        if delta < ROOT_TOLERANCE * root.max(Decimal::ONE) {
            log::trace!("annualized rate converged after {} iterations", i + 1);
            break;
        }
    }

    root - Decimal::ONE
}

/// Smallest `2^k` with `(2^k)^years >= growth`; an overflowing power counts as reaching it.
fn power_of_two_bound(growth: Decimal, years: u32) -> Decimal {
    let mut bound = Decimal::ONE;
    while bound
        .checked_powu(years.into())
        .is_some_and(|power| power < growth)
    {
        bound *= Decimal::TWO;
    }
    bound
}
