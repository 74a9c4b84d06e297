use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::format::format_inr;
use crate::tax::fy::{Slab, TaxYearConfig};

/// Tax contributed by a single slab, for itemized reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlabContribution {
    /// Human-readable slab range, e.g. "₹4,00,000 - ₹7,00,000"
    pub slab: String,
    /// Marginal rate as a percentage
    pub rate: Decimal,
    /// Amount of income taxed within this slab
    pub taxable_amount: Decimal,
    /// Tax due on that amount
    pub tax: Decimal,
}

/// Compute gross tax on `taxable_income` across the year's slabs.
///
/// Each slab contributes `max(0, min(income, upper) - lower) * rate`, so
/// a slab boundary amount is taxed entirely within the lower slab. Returns
/// the total alongside the slabs with a strictly positive contribution,
/// in ascending slab order.
pub fn calculate_slab_tax(
    taxable_income: Decimal,
    config: &TaxYearConfig,
) -> (Decimal, Vec<SlabContribution>) {
    let mut total = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for slab in &config.slabs {
        let capped = match slab.upper {
            Some(upper) => taxable_income.min(upper),
            None => taxable_income,
        };
        let taxable_in_slab = (capped - slab.lower).max(Decimal::ZERO);
        let tax = (taxable_in_slab * slab.rate).round_dp(2);
        total += tax;

        log::debug!(
            "slab {}: taxable={}, tax={}",
            slab_label(slab),
            taxable_in_slab,
            tax
        );

        if tax > Decimal::ZERO {
            breakdown.push(SlabContribution {
                slab: slab_label(slab),
                rate: (slab.rate * dec!(100)).normalize(),
                taxable_amount: taxable_in_slab,
                tax,
            });
        }
    }

    (total, breakdown)
}

fn slab_label(slab: &Slab) -> String {
    match slab.upper {
        Some(upper) => format!("{} - {}", format_inr(slab.lower), format_inr(upper)),
        None => format!("{}+", format_inr(slab.lower)),
    }
}
