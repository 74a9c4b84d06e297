//! Calculate command - full tax liability for one taxpayer profile

use crate::cmd::read_profile;
use crate::format::format_inr;
use crate::profile::{EmploymentType, ProfileInput};
use crate::tax::{compute_tax_liability, generate_tips, FiscalYear, TaxResult, Tip};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CalculateCommand {
    /// JSON file containing the taxpayer profile (or "-" for stdin)
    #[arg(short, long)]
    profile: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Skip the advisory tips section
    #[arg(long)]
    no_tips: bool,
}

/// Row for the slab breakdown table output
#[derive(Debug, Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Slab")]
    slab: String,

    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "Taxable Amount")]
    taxable_amount: String,

    #[tabled(rename = "Tax")]
    tax: String,
}

/// Calculation data for JSON output
#[derive(Debug, Serialize)]
struct CalculationOutput<'a> {
    fiscal_year: String,
    employment_type: EmploymentType,
    result: &'a TaxResult,
    tips: &'a [Tip],
}

impl CalculateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = read_profile(&self.profile)?;

        let negative = input.income.negative_fields();
        if !negative.is_empty() {
            anyhow::bail!("negative amounts not allowed: {}", negative.join(", "));
        }

        let fiscal_year = match (input.fiscal_year.as_deref(), input.as_of) {
            (Some(key), _) => FiscalYear::from_key(key)?,
            (None, Some(date)) => {
                let fy = FiscalYear::from_date(date);
                log::info!("fiscal year resolved from as_of date: {}", fy);
                fy
            }
            (None, None) => anyhow::bail!("profile must specify fiscal_year or as_of"),
        };
        let config = fiscal_year.config()?;
        let result = compute_tax_liability(&input.income, fiscal_year, input.employment_type)?;

        let tips = if self.no_tips {
            Vec::new()
        } else {
            generate_tips(&input.income, input.employment_type, &result, &config)
        };

        if self.json {
            self.print_json(&input, fiscal_year, &result, &tips)
        } else {
            self.print_summary(&input, fiscal_year, &result, &tips);
            Ok(())
        }
    }

    fn print_summary(
        &self,
        input: &ProfileInput,
        fiscal_year: FiscalYear,
        result: &TaxResult,
        tips: &[Tip],
    ) {
        println!();
        println!(
            "TAX CALCULATION ({}) - {}",
            fiscal_year, input.employment_type
        );
        println!(
            "Age Group: {} | Residential Status: {}",
            input.age_group.display(),
            input.residential_status.display()
        );
        println!();
        println!("Taxable Income: {}", format_inr(result.taxable_income));
        println!();

        if result.tax_breakdown.is_empty() {
            println!("No slab tax due.");
        } else {
            let rows: Vec<BreakdownRow> = result
                .tax_breakdown
                .iter()
                .map(|entry| BreakdownRow {
                    slab: entry.slab.clone(),
                    rate: format!("{}%", entry.rate),
                    taxable_amount: format_inr(entry.taxable_amount),
                    tax: format_inr(entry.tax),
                })
                .collect();

            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
                .to_string();
            println!("{}", table);
        }
        println!();

        println!("Gross Tax: {}", format_inr(result.gross_tax));
        println!("Rebate (87A): {}", format_inr(result.rebate_87a));
        println!("Tax After Rebate: {}", format_inr(result.tax_after_rebate));
        println!("Surcharge: {}", format_inr(result.surcharge));
        println!("Cess (4%): {}", format_inr(result.cess));
        println!("STCG Tax: {}", format_inr(result.stcg_tax));
        println!("LTCG Tax: {}", format_inr(result.ltcg_tax));
        println!();

        println!("TOTAL TAX LIABILITY: {}", format_inr(result.total_tax));
        println!(
            "Advance Tax Required: {}",
            if result.advance_tax_required {
                "Yes"
            } else {
                "No"
            }
        );
        println!();

        if !tips.is_empty() {
            println!("TIPS");
            for tip in tips {
                println!("  [{}] {}", tip.category.display(), tip.message);
            }
            println!();
        }
    }

    fn print_json(
        &self,
        input: &ProfileInput,
        fiscal_year: FiscalYear,
        result: &TaxResult,
        tips: &[Tip],
    ) -> anyhow::Result<()> {
        let output = CalculationOutput {
            fiscal_year: fiscal_year.display(),
            employment_type: input.employment_type,
            result,
            tips,
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
