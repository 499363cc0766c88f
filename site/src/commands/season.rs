use chrono::Utc;
use clap::Args;
use color_eyre::Result;
use posts::season::Season;

#[derive(Args, Debug)]
pub(crate) struct SeasonArgs {
    /// 1-12, defaults to the current month
    #[arg(long)]
    pub month: Option<u32>,
}

pub(crate) fn run(args: &SeasonArgs) -> Result<String> {
    let season = match args.month {
        Some(month) => Season::for_month(month)?,
        None => Season::from_date(&Utc::now()),
    };

    Ok(season.to_string())
}
