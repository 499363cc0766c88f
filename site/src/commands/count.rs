use clap::Args;
use color_eyre::Result;
use posts::count_pages;

use crate::{ListingView, SiteConfig};

#[derive(Args, Debug)]
pub(crate) struct CountArgs {
    #[arg(long)]
    pub total: usize,

    #[arg(long)]
    pub page_size: Option<usize>,

    #[arg(long, value_enum, default_value_t = ListingView::Posts)]
    pub view: ListingView,
}

pub(crate) fn run(args: &CountArgs, config: &SiteConfig) -> Result<String> {
    let page_size = args.page_size.unwrap_or_else(|| config.page_size(args.view));

    Ok(count_pages(args.total, page_size)?.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    fn count(total: usize, page_size: Option<usize>) -> Result<String> {
        run(
            &CountArgs {
                total,
                page_size,
                view: ListingView::Posts,
            },
            &SiteConfig::default(),
        )
    }

    #[test]
    fn counts_with_the_view_page_size() {
        assert_eq!(count(13, None).unwrap(), "3");
        assert_eq!(count(0, None).unwrap(), "0");
        assert_eq!(count(10, Some(5)).unwrap(), "2");
    }

    #[test]
    fn zero_page_size_is_an_error() {
        assert!(count(10, Some(0)).is_err());
    }
}
