use std::{fmt, str::FromStr};

use clap::ValueEnum;
use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use posts::SortMode;
use tracing::{info, instrument};

/// The list surfaces of the site. Each one pages at its own size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ListingView {
    Posts,
    Home,
}

impl fmt::Display for ListingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingView::Posts => f.write_str("posts"),
            ListingView::Home => f.write_str("home"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SiteConfig {
    pub posts_page_size: usize,
    pub home_page_size: usize,
    pub default_sort: SortMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            posts_page_size: 6,
            home_page_size: 1,
            default_sort: SortMode::Newest,
        }
    }
}

impl SiteConfig {
    #[instrument(name = "SiteConfig::from_env")]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let posts_page_size =
            page_size_var(&lookup, "SITE_POSTS_PAGE_SIZE", defaults.posts_page_size)?;
        let home_page_size =
            page_size_var(&lookup, "SITE_HOME_PAGE_SIZE", defaults.home_page_size)?;

        let default_sort = match lookup("SITE_DEFAULT_SORT") {
            Some(key) => SortMode::from_str(&key).wrap_err("Invalid SITE_DEFAULT_SORT")?,
            None => defaults.default_sort,
        };

        Ok(Self {
            posts_page_size,
            home_page_size,
            default_sort,
        })
    }

    pub fn page_size(&self, view: ListingView) -> usize {
        match view {
            ListingView::Posts => self.posts_page_size,
            ListingView::Home => self.home_page_size,
        }
    }
}

fn page_size_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
) -> Result<usize> {
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    let size: usize = raw
        .trim()
        .parse()
        .wrap_err_with(|| format!("Invalid {key} value {raw:?}, not parsable"))?;

    if size == 0 {
        return Err(eyre!("{key} must be at least 1"));
    }

    Ok(size)
}
