use std::path::PathBuf;

use clap::Args;
use color_eyre::{eyre::Context, Result};
use posts::{gallery::gallery, ContentRecords};

#[derive(Args, Debug)]
pub(crate) struct GalleryArgs {
    /// JSON array of photos as returned by the content API
    #[arg(long)]
    pub file: PathBuf,
}

pub(crate) fn run(args: &GalleryArgs) -> Result<String> {
    let photos = ContentRecords::from_path(&args.file)?;

    render(&photos)
}

fn render(photos: &ContentRecords) -> Result<String> {
    serde_json::to_string_pretty(&gallery(photos.records())).wrap_err("Could not serialize gallery")
}
