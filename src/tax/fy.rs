use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::tax::TaxError;

/// Indian Fiscal Year (runs 1 April to 31 March)
/// The year value represents the end year (e.g., 2026 = FY 2025-26 / AY 2026-27)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FiscalYear(pub i32);

/// A single income slab taxed at one marginal rate.
/// `upper` is `None` for the final unbounded slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slab {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

/// New Tax Regime parameters for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxYearConfig {
    #[serde(serialize_with = "serialize_fiscal_year")]
    pub fiscal_year: FiscalYear,
    pub slabs: Vec<Slab>,
    pub standard_deduction: Decimal,
    pub rebate_ceiling: Decimal,
    pub rebate_cap: Decimal,
    pub advance_tax_threshold: Decimal,
}

fn serialize_fiscal_year<S: serde::Serializer>(
    fy: &FiscalYear,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&fy.display())
}

impl FiscalYear {
    /// Fiscal years with a supported slab configuration.
    pub fn supported() -> [FiscalYear; 2] {
        [FiscalYear(2025), FiscalYear(2026)]
    }

    /// Parse a canonical fiscal year key, e.g. "FY 2025-26 / AY 2026-27"
    pub fn from_key(key: &str) -> Result<FiscalYear, TaxError> {
        Self::supported()
            .into_iter()
            .find(|fy| fy.display() == key.trim())
            .ok_or_else(|| TaxError::UnsupportedFiscalYear(key.to_string()))
    }

    /// Create a fiscal year from a date
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year();
        // Fiscal year starts 1 April
        // If date is 1 April or later, it's in the fiscal year ending next March
        if date >= NaiveDate::from_ymd_opt(year, 4, 1).unwrap() {
            FiscalYear(year + 1)
        } else {
            FiscalYear(year)
        }
    }

    /// Display as "FY 2025-26 / AY 2026-27" format
    pub fn display(&self) -> String {
        format!(
            "FY {}-{:02} / AY {}-{:02}",
            self.0 - 1,
            self.0 % 100,
            self.0,
            (self.0 + 1) % 100
        )
    }

    /// Get the New Tax Regime configuration for this fiscal year.
    ///
    /// Fails for years without a supported slab table; there is no
    /// fallback to another year's rules.
    pub fn config(&self) -> Result<TaxYearConfig, TaxError> {
        let config = match self.0 {
            // FY 2024-25 / AY 2025-26
            2025 => TaxYearConfig {
                fiscal_year: *self,
                slabs: vec![
                    slab(dec!(0), Some(dec!(300_000)), dec!(0)),
                    slab(dec!(300_000), Some(dec!(700_000)), dec!(0.05)),
                    slab(dec!(700_000), Some(dec!(1_000_000)), dec!(0.10)),
                    slab(dec!(1_000_000), Some(dec!(1_200_000)), dec!(0.15)),
                    slab(dec!(1_200_000), Some(dec!(1_500_000)), dec!(0.20)),
                    slab(dec!(1_500_000), None, dec!(0.30)),
                ],
                standard_deduction: dec!(75_000),
                rebate_ceiling: dec!(700_000),
                rebate_cap: dec!(25_000),
                advance_tax_threshold: dec!(10_000),
            },
            // FY 2025-26 / AY 2026-27 (Budget 2025: 0% slab widened to 4L,
            // rebate ceiling raised to 12L with a 60K cap)
            2026 => TaxYearConfig {
                fiscal_year: *self,
                slabs: vec![
                    slab(dec!(0), Some(dec!(400_000)), dec!(0)),
                    slab(dec!(400_000), Some(dec!(700_000)), dec!(0.05)),
                    slab(dec!(700_000), Some(dec!(1_000_000)), dec!(0.10)),
                    slab(dec!(1_000_000), Some(dec!(1_200_000)), dec!(0.15)),
                    slab(dec!(1_200_000), Some(dec!(1_500_000)), dec!(0.20)),
                    slab(dec!(1_500_000), None, dec!(0.30)),
                ],
                standard_deduction: dec!(75_000),
                rebate_ceiling: dec!(1_200_000),
                rebate_cap: dec!(60_000),
                advance_tax_threshold: dec!(10_000),
            },
            _ => return Err(TaxError::UnsupportedFiscalYear(self.display())),
        };
        Ok(config)
    }
}

fn slab(lower: Decimal, upper: Option<Decimal>, rate: Decimal) -> Slab {
    Slab { lower, upper, rate }
}

impl std::fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
