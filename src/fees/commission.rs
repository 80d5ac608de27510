//! Payment Gateway Commission Calculator
//!
//! Estimates the commission withheld by the payment gateway and the net
//! revenue left for the organizer. The gateway charges 2% plus 18% GST on
//! that 2%, approximated here as a flat 2.5%.
//!
//! Amounts are rounded to cents with `round(x * 100) / 100`. Invalid amounts
//! (negative, zero, NaN, infinite) never fail; they produce 0.

use tracing::{debug, trace, warn};

use crate::coerce::{finite_or_zero, round2};
use crate::error::{FeeError, FeeResult};
use crate::types::{BulkCommissionResult, CommissionResult, Transaction};

/// Default gateway commission rate (2.5%)
pub const DEFAULT_COMMISSION_RATE: f64 = 0.025;

/// Anything that carries a gross amount to charge commission on
pub trait Chargeable {
    /// Gross amount of the record. NaN and infinities count as 0 in bulk totals.
    fn gross_amount(&self) -> f64;
}

impl Chargeable for Transaction {
    fn gross_amount(&self) -> f64 {
        self.amount
    }
}

impl Chargeable for f64 {
    fn gross_amount(&self) -> f64 {
        *self
    }
}

impl Chargeable for Option<f64> {
    fn gross_amount(&self) -> f64 {
        self.unwrap_or(0.0)
    }
}

impl<T: Chargeable + ?Sized> Chargeable for &T {
    fn gross_amount(&self) -> f64 {
        (**self).gross_amount()
    }
}

/// Commission calculator with a rate fixed at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionCalculator {
    rate: f64,
}

impl Default for CommissionCalculator {
    fn default() -> Self {
        Self {
            rate: DEFAULT_COMMISSION_RATE,
        }
    }
}

fn is_chargeable(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

impl CommissionCalculator {
    /// Build a calculator for `rate` (fraction, e.g. 0.025 = 2.5%)
    pub fn with_rate(rate: f64) -> FeeResult<Self> {
        if !rate.is_finite() || !(0.0..1.0).contains(&rate) {
            return Err(FeeError::InvalidRate(rate));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Gateway commission on `amount`, rounded to cents
    pub fn calculate_commission(&self, amount: f64) -> f64 {
        if !is_chargeable(amount) {
            trace!(amount, "non-chargeable amount, commission is zero");
            return 0.0;
        }
        round2(amount * self.rate)
    }

    /// Amount left after the gateway commission, rounded to cents
    pub fn calculate_net_revenue(&self, amount: f64) -> f64 {
        if !is_chargeable(amount) {
            return 0.0;
        }
        round2(amount - self.calculate_commission(amount))
    }

    /// Commission and net revenue for a single amount
    pub fn calculate(&self, amount: f64) -> CommissionResult {
        CommissionResult {
            commission: self.calculate_commission(amount),
            net_revenue: self.calculate_net_revenue(amount),
        }
    }

    /// Totals over a batch of transactions.
    ///
    /// Commission is charged once on the summed gross, not per transaction,
    /// so the result can differ from adding up individual commissions.
    /// Non-finite amounts count as 0, and a sum that overflows `f64` yields
    /// all-zero totals, so every field stays a finite JSON number.
    pub fn calculate_bulk_commission<I>(&self, transactions: I) -> BulkCommissionResult
    where
        I: IntoIterator,
        I::Item: Chargeable,
    {
        let mut count = 0usize;
        let gross: f64 = transactions
            .into_iter()
            .map(|tx| {
                count += 1;
                finite_or_zero(tx.gross_amount())
            })
            .sum();

        if !gross.is_finite() {
            warn!(count, "bulk gross overflowed, totals reset to zero");
        }
        let total_gross = round2(finite_or_zero(gross));
        let total_commission = self.calculate_commission(total_gross);
        let total_net = round2(total_gross - total_commission);

        debug!(
            count,
            total_gross, total_commission, total_net, "bulk commission computed"
        );

        BulkCommissionResult {
            total_gross,
            total_commission,
            total_net,
        }
    }
}

/// [`CommissionCalculator::calculate_commission`] at the default rate
pub fn calculate_commission(amount: f64) -> f64 {
    CommissionCalculator::default().calculate_commission(amount)
}

/// [`CommissionCalculator::calculate_net_revenue`] at the default rate
pub fn calculate_net_revenue(amount: f64) -> f64 {
    CommissionCalculator::default().calculate_net_revenue(amount)
}

/// [`CommissionCalculator::calculate_bulk_commission`] at the default rate
pub fn calculate_bulk_commission<I>(transactions: I) -> BulkCommissionResult
where
    I: IntoIterator,
    I::Item: Chargeable,
{
    CommissionCalculator::default().calculate_bulk_commission(transactions)
}
