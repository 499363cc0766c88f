use std::path::PathBuf;

use clap::Args;
use color_eyre::Result;
use posts::ContentRecords;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    #[arg(long)]
    pub file: PathBuf,
}

pub(crate) fn run(args: &ValidateArgs) -> Result<String> {
    let records = ContentRecords::from_path(&args.file)?;

    check(&records)
}

fn check(records: &ContentRecords) -> Result<String> {
    info!("Validating {} records", records.len());
    records.validate()?;

    Ok(format!("{} records valid! ✅", records.len()))
}
