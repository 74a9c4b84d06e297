pub mod engine;
pub mod fy;
pub mod slab;
pub mod tips;

// Flat public surface for domain types and functions.
pub use engine::{
    capital_gains_tax, compute_tax_liability, rebate_87a, surcharge_and_cess, taxable_income,
    TaxResult,
};
pub use fy::{FiscalYear, Slab, TaxYearConfig};
pub use slab::{calculate_slab_tax, SlabContribution};
pub use tips::{generate_tips, Tip, TipCategory};

/// Failures the engine can produce. An unrecognized fiscal year is the
/// only hard failure; absent income fields are zero by contract.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaxError {
    #[error("unsupported fiscal year: {0}")]
    UnsupportedFiscalYear(String),
}
