use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::profile::{EmploymentType, IncomeProfile};
use crate::tax::fy::{FiscalYear, TaxYearConfig};
use crate::tax::slab::{calculate_slab_tax, SlabContribution};
use crate::tax::TaxError;

/// STCG rate (equity)
const STCG_RATE: Decimal = dec!(0.15);
/// LTCG rate on gains above the exemption (equity)
const LTCG_RATE: Decimal = dec!(0.10);
/// Annual LTCG exemption (equity)
pub const LTCG_EXEMPTION: Decimal = dec!(100_000);
/// Health & Education Cess on tax plus surcharge
const CESS_RATE: Decimal = dec!(0.04);

/// Complete result of one tax calculation. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxResult {
    pub taxable_income: Decimal,
    pub gross_tax: Decimal,
    pub rebate_87a: Decimal,
    pub tax_after_rebate: Decimal,
    pub surcharge: Decimal,
    pub cess: Decimal,
    pub stcg_tax: Decimal,
    pub ltcg_tax: Decimal,
    pub total_tax: Decimal,
    pub advance_tax_required: bool,
    pub tax_breakdown: Vec<SlabContribution>,
}

/// Slab-taxable income for the profile under the given employment type.
///
/// Capital gains are excluded here; they are taxed at flat rates by
/// [`capital_gains_tax`]. Negative intermediate sums floor at zero.
pub fn taxable_income(
    income: &IncomeProfile,
    employment: EmploymentType,
    config: &TaxYearConfig,
) -> Decimal {
    let taxable = match employment {
        EmploymentType::Salaried => {
            let gross_salary = income.basic_salary + income.hra + income.bonus;
            gross_salary - config.standard_deduction
        }
        EmploymentType::Rental => {
            income.rent_received - income.municipal_tax - income.interest_paid
        }
        // Expenses are assumed to already be reflected in net_profit
        EmploymentType::Freelancer | EmploymentType::Business => income.net_profit,
        EmploymentType::Investor => income.dividends + income.interest_income,
        EmploymentType::Mixed => {
            log::warn!("no slab income rule for Mixed profiles; slab-taxable income is zero");
            Decimal::ZERO
        }
    };
    taxable.max(Decimal::ZERO)
}

/// Section 87A rebate: full or capped waiver of slab tax for taxable
/// income at or below the year's ceiling, nothing above it.
pub fn rebate_87a(gross_tax: Decimal, taxable_income: Decimal, config: &TaxYearConfig) -> Decimal {
    if taxable_income <= config.rebate_ceiling {
        gross_tax.min(config.rebate_cap)
    } else {
        Decimal::ZERO
    }
}

/// Surcharge (tiered by taxable income) and 4% cess on tax plus surcharge.
pub fn surcharge_and_cess(tax_after_rebate: Decimal, taxable_income: Decimal) -> (Decimal, Decimal) {
    let surcharge_rate = if taxable_income <= dec!(5_000_000) {
        Decimal::ZERO
    } else if taxable_income <= dec!(10_000_000) {
        dec!(0.10)
    } else if taxable_income <= dec!(20_000_000) {
        dec!(0.15)
    } else if taxable_income <= dec!(50_000_000) {
        dec!(0.25)
    } else {
        dec!(0.37)
    };

    let surcharge = (tax_after_rebate * surcharge_rate).round_dp(2);
    let cess = ((tax_after_rebate + surcharge) * CESS_RATE).round_dp(2);
    (surcharge, cess)
}

/// Flat-rate capital gains tax, outside the slab system.
/// Returns (STCG tax, LTCG tax).
pub fn capital_gains_tax(stcg: Decimal, ltcg: Decimal) -> (Decimal, Decimal) {
    let stcg_tax = (stcg * STCG_RATE).round_dp(2);
    let taxable_ltcg = (ltcg - LTCG_EXEMPTION).max(Decimal::ZERO);
    let ltcg_tax = (taxable_ltcg * LTCG_RATE).round_dp(2);
    (stcg_tax, ltcg_tax)
}

/// Compute the total tax liability for one profile.
///
/// Pipeline: config lookup, taxable income, slab tax, rebate, surcharge
/// and cess on the rebated tax, flat capital gains tax, then the total.
/// The only failure is an unsupported fiscal year.
pub fn compute_tax_liability(
    income: &IncomeProfile,
    fiscal_year: FiscalYear,
    employment: EmploymentType,
) -> Result<TaxResult, TaxError> {
    let config = fiscal_year.config()?;

    let taxable_income = taxable_income(income, employment, &config);
    let (gross_tax, tax_breakdown) = calculate_slab_tax(taxable_income, &config);

    let rebate = rebate_87a(gross_tax, taxable_income, &config);
    let tax_after_rebate = gross_tax - rebate;

    let (surcharge, cess) = surcharge_and_cess(tax_after_rebate, taxable_income);
    let (stcg_tax, ltcg_tax) = capital_gains_tax(income.stcg, income.ltcg);

    let total_tax = tax_after_rebate + surcharge + cess + stcg_tax + ltcg_tax;
    let advance_tax_required = total_tax > config.advance_tax_threshold;

    log::debug!(
        "{} {}: taxable={}, gross={}, rebate={}, total={}",
        fiscal_year,
        employment,
        taxable_income,
        gross_tax,
        rebate,
        total_tax
    );

    Ok(TaxResult {
        taxable_income,
        gross_tax,
        rebate_87a: rebate,
        tax_after_rebate,
        surcharge,
        cess,
        stcg_tax,
        ltcg_tax,
        total_tax,
        advance_tax_required,
        tax_breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TaxYearConfig {
        FiscalYear(2026).config().unwrap()
    }

    #[test]
    fn salaried_taxable_income_applies_standard_deduction() {
        let income = IncomeProfile {
            basic_salary: dec!(600_000),
            ..Default::default()
        };
        let taxable = taxable_income(&income, EmploymentType::Salaried, &config());
        assert_eq!(taxable, dec!(525_000));
    }

    #[test]
    fn salaried_taxable_income_floors_at_zero() {
        let income = IncomeProfile {
            basic_salary: dec!(50_000),
            ..Default::default()
        };
        let taxable = taxable_income(&income, EmploymentType::Salaried, &config());
        assert_eq!(taxable, Decimal::ZERO);
    }

    #[test]
    fn rental_taxable_income_deducts_municipal_tax_and_interest() {
        let income = IncomeProfile {
            rent_received: dec!(480_000),
            municipal_tax: dec!(20_000),
            interest_paid: dec!(160_000),
            ..Default::default()
        };
        let taxable = taxable_income(&income, EmploymentType::Rental, &config());
        assert_eq!(taxable, dec!(300_000));
    }

    #[test]
    fn rental_deductions_exceeding_rent_floor_at_zero() {
        let income = IncomeProfile {
            rent_received: dec!(100_000),
            interest_paid: dec!(250_000),
            ..Default::default()
        };
        let taxable = taxable_income(&income, EmploymentType::Rental, &config());
        assert_eq!(taxable, Decimal::ZERO);
    }

    #[test]
    fn business_net_profit_taken_as_is() {
        let income = IncomeProfile {
            net_profit: dec!(900_000),
            expenses: dec!(300_000),
            ..Default::default()
        };
        // Expenses are collected but never subtracted
        for employment in [EmploymentType::Freelancer, EmploymentType::Business] {
            assert_eq!(taxable_income(&income, employment, &config()), dec!(900_000));
        }
    }

    #[test]
    fn investor_income_excludes_capital_gains() {
        let income = IncomeProfile {
            dividends: dec!(300_000),
            interest_income: dec!(100_000),
            stcg: dec!(500_000),
            ltcg: dec!(500_000),
            ..Default::default()
        };
        let taxable = taxable_income(&income, EmploymentType::Investor, &config());
        assert_eq!(taxable, dec!(400_000));
    }

    #[test]
    fn mixed_profile_has_zero_slab_income() {
        let income = IncomeProfile {
            basic_salary: dec!(600_000),
            net_profit: dec!(400_000),
            ..Default::default()
        };
        let taxable = taxable_income(&income, EmploymentType::Mixed, &config());
        assert_eq!(taxable, Decimal::ZERO);
    }

    #[test]
    fn rebate_applies_at_ceiling() {
        let config = config();
        // Gross tax at exactly 12L: 15,000 + 30,000 + 30,000 = 75,000
        let (gross, _) = calculate_slab_tax(dec!(1_200_000), &config);
        assert_eq!(gross, dec!(75_000));
        assert_eq!(rebate_87a(gross, dec!(1_200_000), &config), dec!(60_000));
    }

    #[test]
    fn rebate_cliff_one_rupee_above_ceiling() {
        let at_ceiling = compute_tax_liability(
            &IncomeProfile {
                dividends: dec!(1_200_000),
                ..Default::default()
            },
            FiscalYear(2026),
            EmploymentType::Investor,
        )
        .unwrap();
        let above_ceiling = compute_tax_liability(
            &IncomeProfile {
                dividends: dec!(1_200_001),
                ..Default::default()
            },
            FiscalYear(2026),
            EmploymentType::Investor,
        )
        .unwrap();

        assert_eq!(at_ceiling.rebate_87a, dec!(60_000));
        assert_eq!(at_ceiling.tax_after_rebate, dec!(15_000));

        // Losing the whole rebate makes tax-after-rebate jump discontinuously
        assert_eq!(above_ceiling.rebate_87a, Decimal::ZERO);
        assert_eq!(above_ceiling.tax_after_rebate, dec!(75_000.15));
        assert!(above_ceiling.tax_after_rebate - at_ceiling.tax_after_rebate > dec!(60_000));
    }

    #[test]
    fn rebate_caps_at_gross_tax() {
        let config = config();
        assert_eq!(rebate_87a(dec!(6250), dec!(525_000), &config), dec!(6250));
    }

    #[test]
    fn previous_year_rebate_parameters_differ() {
        let config = FiscalYear(2025).config().unwrap();
        // FY 2024-25 ceiling is 7L with a 25K cap
        assert_eq!(rebate_87a(dec!(20_000), dec!(700_000), &config), dec!(20_000));
        assert_eq!(rebate_87a(dec!(30_000), dec!(700_000), &config), dec!(25_000));
        assert_eq!(rebate_87a(dec!(20_000), dec!(700_001), &config), Decimal::ZERO);
    }

    #[test]
    fn no_surcharge_at_or_below_50_lakh() {
        let (surcharge, cess) = surcharge_and_cess(dec!(100_000), dec!(5_000_000));
        assert_eq!(surcharge, Decimal::ZERO);
        assert_eq!(cess, dec!(4000));
    }

    #[test]
    fn surcharge_steps_up_at_each_threshold() {
        let tax = dec!(100_000);
        let incomes = [
            (dec!(5_000_001), dec!(10_000)),
            (dec!(10_000_001), dec!(15_000)),
            (dec!(20_000_001), dec!(25_000)),
            (dec!(50_000_001), dec!(37_000)),
        ];
        let mut previous = Decimal::ZERO;
        for (income, expected) in incomes {
            let (surcharge, _) = surcharge_and_cess(tax, income);
            assert_eq!(surcharge, expected);
            assert!(surcharge > previous);
            previous = surcharge;
        }
    }

    #[test]
    fn surcharge_constant_within_a_tier() {
        let tax = dec!(100_000);
        let (at_lower, _) = surcharge_and_cess(tax, dec!(6_000_000));
        let (at_upper, _) = surcharge_and_cess(tax, dec!(10_000_000));
        assert_eq!(at_lower, at_upper);
    }

    #[test]
    fn cess_compounds_on_surcharge() {
        let (surcharge, cess) = surcharge_and_cess(dec!(1_000_000), dec!(6_000_000));
        assert_eq!(surcharge, dec!(100_000));
        // 4% of tax plus surcharge, not of tax alone
        assert_eq!(cess, dec!(44_000));
    }

    #[test]
    fn ltcg_within_exemption_is_tax_free() {
        let (stcg_tax, ltcg_tax) = capital_gains_tax(Decimal::ZERO, dec!(100_000));
        assert_eq!(stcg_tax, Decimal::ZERO);
        assert_eq!(ltcg_tax, Decimal::ZERO);
    }

    #[test]
    fn ltcg_taxed_only_above_exemption() {
        let (_, ltcg_tax) = capital_gains_tax(Decimal::ZERO, dec!(150_000));
        assert_eq!(ltcg_tax, dec!(5000));
    }

    #[test]
    fn stcg_taxed_at_flat_fifteen_percent() {
        let (stcg_tax, _) = capital_gains_tax(dec!(100_000), Decimal::ZERO);
        assert_eq!(stcg_tax, dec!(15_000));
    }

    #[test]
    fn salaried_six_lakh_owes_nothing() {
        let income = IncomeProfile {
            basic_salary: dec!(600_000),
            ..Default::default()
        };
        let result =
            compute_tax_liability(&income, FiscalYear(2026), EmploymentType::Salaried).unwrap();

        assert_eq!(result.taxable_income, dec!(525_000));
        assert_eq!(result.gross_tax, dec!(6250));
        assert_eq!(result.rebate_87a, dec!(6250));
        assert_eq!(result.tax_after_rebate, Decimal::ZERO);
        assert_eq!(result.surcharge, Decimal::ZERO);
        assert_eq!(result.cess, Decimal::ZERO);
        assert_eq!(result.total_tax, Decimal::ZERO);
        assert!(!result.advance_tax_required);
    }

    #[test]
    fn investor_twenty_lakh_with_ltcg() {
        let income = IncomeProfile {
            dividends: dec!(2_000_000),
            ltcg: dec!(200_000),
            ..Default::default()
        };
        let result =
            compute_tax_liability(&income, FiscalYear(2026), EmploymentType::Investor).unwrap();

        assert_eq!(result.taxable_income, dec!(2_000_000));
        assert_eq!(result.gross_tax, dec!(285_000));
        assert_eq!(result.rebate_87a, Decimal::ZERO);
        assert_eq!(result.surcharge, Decimal::ZERO);
        assert_eq!(result.cess, dec!(11_400));
        assert_eq!(result.stcg_tax, Decimal::ZERO);
        assert_eq!(result.ltcg_tax, dec!(10_000));
        assert_eq!(result.total_tax, dec!(306_400));
        assert!(result.advance_tax_required);
    }

    #[test]
    fn mixed_profile_still_pays_capital_gains_tax() {
        let income = IncomeProfile {
            basic_salary: dec!(600_000),
            ltcg: dec!(150_000),
            ..Default::default()
        };
        let result =
            compute_tax_liability(&income, FiscalYear(2026), EmploymentType::Mixed).unwrap();
        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.total_tax, dec!(5000));
    }

    #[test]
    fn same_profile_differs_across_years() {
        let income = IncomeProfile {
            basic_salary: dec!(1_000_000),
            ..Default::default()
        };
        let prev =
            compute_tax_liability(&income, FiscalYear(2025), EmploymentType::Salaried).unwrap();
        let curr =
            compute_tax_liability(&income, FiscalYear(2026), EmploymentType::Salaried).unwrap();
        // 9,25,000 taxable: FY 2024-25 rebate ceiling (7L) is exceeded,
        // FY 2025-26 ceiling (12L) is not
        assert_eq!(prev.rebate_87a, Decimal::ZERO);
        assert!(prev.total_tax > Decimal::ZERO);
        assert_eq!(curr.total_tax, Decimal::ZERO);
    }

    #[test]
    fn unsupported_fiscal_year_produces_no_result() {
        let income = IncomeProfile::default();
        let err = compute_tax_liability(&income, FiscalYear(1999), EmploymentType::Salaried)
            .unwrap_err();
        assert!(matches!(err, TaxError::UnsupportedFiscalYear(_)));
    }

    #[test]
    fn identical_inputs_yield_identical_results() {
        let income = IncomeProfile {
            dividends: dec!(2_000_000),
            stcg: dec!(50_000),
            ltcg: dec!(200_000),
            ..Default::default()
        };
        let a = compute_tax_liability(&income, FiscalYear(2026), EmploymentType::Investor).unwrap();
        let b = compute_tax_liability(&income, FiscalYear(2026), EmploymentType::Investor).unwrap();
        assert_eq!(a, b);
    }
}
