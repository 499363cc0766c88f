use std::path::PathBuf;

use clap::Args;
use color_eyre::{eyre::Context, Result};
use posts::{present_page, ContentRecords, PageRequest, SortMode};
use tracing::{info, instrument};

use crate::{ListingView, SiteConfig};

#[derive(Args, Debug)]
pub(crate) struct PageArgs {
    /// JSON array of posts as returned by the content API
    #[arg(long)]
    pub file: PathBuf,

    /// newest, oldest, highestUpvotes or highestDownvotes
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Overrides the page size of the view
    #[arg(long)]
    pub page_size: Option<usize>,

    #[arg(long, value_enum, default_value_t = ListingView::Posts)]
    pub view: ListingView,
}

pub(crate) fn run(args: &PageArgs, config: &SiteConfig) -> Result<String> {
    let records = ContentRecords::from_path(&args.file)?;

    render(&records, args, config)
}

#[instrument(skip(records, config), fields(records = records.len()))]
pub(crate) fn render(records: &ContentRecords, args: &PageArgs, config: &SiteConfig) -> Result<String> {
    let mode = match &args.sort {
        Some(key) => key.parse::<SortMode>()?,
        None => config.default_sort,
    };
    let page_size = args.page_size.unwrap_or_else(|| config.page_size(args.view));

    let request = PageRequest::new(args.page, page_size)?;
    let page = present_page(records.records(), mode, request)?;

    info!(
        %mode,
        shown = page.items.len(),
        total_pages = page.total_pages,
        "Presented page"
    );

    serde_json::to_string_pretty(&page).wrap_err("Could not serialize page")
}
