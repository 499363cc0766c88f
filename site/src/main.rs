use clap::Parser;
use color_eyre::Result;

use commands::Command;

mod commands;
mod config;

pub(crate) use config::{ListingView, SiteConfig};

#[derive(Parser)]
#[command(author, version, about)]
struct CliArgs {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_common::setup_tracing("site")?;

    let cli = CliArgs::parse();
    let config = SiteConfig::from_env()?;

    let output = cli.command.run(&config)?;
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_page_flags() {
        let cli = CliArgs::try_parse_from([
            "site",
            "page",
            "--file",
            "posts.json",
            "--sort",
            "highestUpvotes",
            "--page",
            "2",
            "--view",
            "home",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Page(_)));
    }

    #[test]
    fn rejects_negative_page_numbers() {
        let parsed = CliArgs::try_parse_from(["site", "page", "--file", "p.json", "--page", "-1"]);

        assert!(parsed.is_err());
    }
}
