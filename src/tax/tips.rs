use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::format::format_inr;
use crate::profile::{EmploymentType, IncomeProfile};
use crate::tax::engine::{TaxResult, LTCG_EXEMPTION};
use crate::tax::fy::TaxYearConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TipCategory {
    AdvanceTax,
    Rebate,
    CapitalGains,
    Deductions,
    Profile,
}

impl TipCategory {
    pub fn display(&self) -> &'static str {
        match self {
            TipCategory::AdvanceTax => "Advance Tax",
            TipCategory::Rebate => "Rebate",
            TipCategory::CapitalGains => "Capital Gains",
            TipCategory::Deductions => "Deductions",
            TipCategory::Profile => "Profile",
        }
    }
}

/// Advisory note derived from a completed calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub category: TipCategory,
    pub message: String,
}

fn tip(category: TipCategory, message: String) -> Tip {
    Tip { category, message }
}

/// Derive advisory notes from the profile and its computed result.
/// Reads the result only; never recomputes any tax amount.
pub fn generate_tips(
    income: &IncomeProfile,
    employment: EmploymentType,
    result: &TaxResult,
    config: &TaxYearConfig,
) -> Vec<Tip> {
    let mut tips = Vec::new();

    if result.advance_tax_required {
        let mut message = format!(
            "Estimated liability of {} exceeds the {} advance tax threshold. \
             Pay advance tax in quarterly instalments to avoid interest under sections 234B/234C.",
            format_inr(result.total_tax),
            format_inr(config.advance_tax_threshold),
        );
        if income.advance_tax_paid > Decimal::ZERO {
            message.push_str(&format!(
                " {} already paid as advance tax will be adjusted against this.",
                format_inr(income.advance_tax_paid)
            ));
        }
        tips.push(tip(TipCategory::AdvanceTax, message));
    }

    if result.rebate_87a > Decimal::ZERO && result.tax_after_rebate.is_zero() {
        tips.push(tip(
            TipCategory::Rebate,
            format!(
                "The Section 87A rebate of {} wipes out your entire slab tax.",
                format_inr(result.rebate_87a)
            ),
        ));
    }

    // Just past the cliff: the whole rebate was forfeited for a small
    // amount of extra income
    let ceiling = config.rebate_ceiling;
    if result.taxable_income > ceiling && result.taxable_income <= ceiling * dec!(1.1) {
        tips.push(tip(
            TipCategory::Rebate,
            format!(
                "Taxable income is only {} above the {} rebate ceiling, \
                 which forfeits a rebate of up to {}.",
                format_inr(result.taxable_income - ceiling),
                format_inr(ceiling),
                format_inr(config.rebate_cap),
            ),
        ));
    }

    if income.ltcg > Decimal::ZERO {
        if income.ltcg <= LTCG_EXEMPTION {
            tips.push(tip(
                TipCategory::CapitalGains,
                format!(
                    "Long-term gains of {} fall within the {} annual exemption, \
                     leaving {} of tax-free headroom this year.",
                    format_inr(income.ltcg),
                    format_inr(LTCG_EXEMPTION),
                    format_inr(LTCG_EXEMPTION - income.ltcg),
                ),
            ));
        } else {
            tips.push(tip(
                TipCategory::CapitalGains,
                format!(
                    "The first {} of long-term gains is exempt; {} was taxed at 10%.",
                    format_inr(LTCG_EXEMPTION),
                    format_inr(income.ltcg - LTCG_EXEMPTION),
                ),
            ));
        }
    }

    match employment {
        EmploymentType::Salaried => {
            if income.pf + income.employer_nps > Decimal::ZERO {
                tips.push(tip(
                    TipCategory::Deductions,
                    "PF and employer NPS contributions are recorded but not deducted here; \
                     the New Regime calculation models the standard deduction only."
                        .to_string(),
                ));
            }
        }
        EmploymentType::Freelancer | EmploymentType::Business => {
            if income.expenses > Decimal::ZERO {
                tips.push(tip(
                    TipCategory::Deductions,
                    "Expenses are recorded but not subtracted; net profit is taxed as entered."
                        .to_string(),
                ));
            }
        }
        EmploymentType::Mixed => {
            tips.push(tip(
                TipCategory::Profile,
                "Mixed profiles have no slab income rule yet; \
                 only capital gains were taxed in this calculation."
                    .to_string(),
            ));
        }
        EmploymentType::Rental | EmploymentType::Investor => {}
    }

    tips
}
