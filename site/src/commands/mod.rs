use clap::Subcommand;
use color_eyre::Result;

use crate::SiteConfig;

pub(crate) mod count;
pub(crate) mod gallery;
pub(crate) mod page;
pub(crate) mod season;
pub(crate) mod users;
pub(crate) mod validate;

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print one sorted page of posts as JSON
    Page(page::PageArgs),
    /// Print how many pages a list of the given size has
    Count(count::CountArgs),
    /// Print the season that picks the banner artwork
    Season(season::SeasonArgs),
    /// Print gallery slides for a list of photos
    Gallery(gallery::GalleryArgs),
    /// Print the accounts an admin can manage
    Users(users::UsersArgs),
    /// Check that a records file parses and has unique ids
    Validate(validate::ValidateArgs),
}

impl Command {
    pub(crate) fn run(&self, config: &SiteConfig) -> Result<String> {
        match self {
            Command::Page(args) => page::run(args, config),
            Command::Count(args) => count::run(args, config),
            Command::Season(args) => season::run(args),
            Command::Gallery(args) => gallery::run(args),
            Command::Users(args) => users::run(args),
            Command::Validate(args) => validate::run(args),
        }
    }
}
