use clap::{Parser, Subcommand};

mod cmd;
mod format;
mod profile;
mod tax;

#[derive(Parser, Debug)]
#[command(name = "taxin", version, about = "Indian Income Tax Calculator for the New Tax Regime")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate tax liability from a taxpayer profile
    Calculate(cmd::calculate::CalculateCommand),
    /// Show slab rates and parameters for supported fiscal years
    Slabs(cmd::slabs::SlabsCommand),
    /// Print the JSON Schema for the profile input format
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calculate(cmd) => cmd.exec(),
        Command::Slabs(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
