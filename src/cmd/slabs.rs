//! Slabs command - show the rate table and parameters for a fiscal year

use crate::format::format_inr;
use crate::tax::{FiscalYear, TaxYearConfig};
use clap::Args;
use rust_decimal_macros::dec;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct SlabsCommand {
    /// Fiscal year key, e.g. "FY 2025-26 / AY 2026-27" (default: all supported years)
    #[arg(short, long)]
    year: Option<String>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Row for the slab table output
#[derive(Debug, Tabled)]
struct SlabRow {
    #[tabled(rename = "Slab")]
    slab: String,

    #[tabled(rename = "Rate")]
    rate: String,
}

impl SlabsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let years = match &self.year {
            Some(key) => vec![FiscalYear::from_key(key)?],
            None => FiscalYear::supported().to_vec(),
        };

        let configs = years
            .iter()
            .map(|fy| fy.config())
            .collect::<Result<Vec<_>, _>>()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&configs)?);
        } else {
            for config in &configs {
                self.print_config(config);
            }
        }
        Ok(())
    }

    fn print_config(&self, config: &TaxYearConfig) {
        println!();
        println!("SLAB RATES ({})", config.fiscal_year);
        println!();

        let rows: Vec<SlabRow> = config
            .slabs
            .iter()
            .map(|slab| {
                let label = match slab.upper {
                    Some(upper) => {
                        format!("{} - {}", format_inr(slab.lower), format_inr(upper))
                    }
                    None => format!("{}+", format_inr(slab.lower)),
                };
                SlabRow {
                    slab: label,
                    rate: format!("{}%", (slab.rate * dec!(100)).normalize()),
                }
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();

        println!(
            "Standard Deduction: {}",
            format_inr(config.standard_deduction)
        );
        println!("Rebate Ceiling (87A): {}", format_inr(config.rebate_ceiling));
        println!("Rebate Cap (87A): {}", format_inr(config.rebate_cap));
        println!(
            "Advance Tax Threshold: {}",
            format_inr(config.advance_tax_threshold)
        );
        println!();
    }
}
