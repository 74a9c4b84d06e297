//! Schema command - print the expected profile input format

use crate::profile::ProfileInput;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = schema_for!(ProfileInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
