use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::instrument;

use crate::{date::PostedOn, error::ListError};

/// Numeric engagement counters on a record. Absent counters count as zero.
pub trait Engagement {
    fn upvotes(&self) -> u64;
    fn downvotes(&self) -> u64;
}

impl<T> Engagement for &T
where
    T: Engagement + ?Sized,
{
    fn upvotes(&self) -> u64 {
        (**self).upvotes()
    }

    fn downvotes(&self) -> u64 {
        (**self).downvotes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    MostUpvoted,
    MostDownvoted,
}

pub type Comparator<T> = fn(&T, &T) -> Ordering;

impl SortMode {
    /// Dropdown order.
    pub const ALL: [SortMode; 4] = [
        SortMode::Newest,
        SortMode::Oldest,
        SortMode::MostUpvoted,
        SortMode::MostDownvoted,
    ];

    /// The key the list views use to select this mode.
    pub fn key(self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::MostUpvoted => "highestUpvotes",
            SortMode::MostDownvoted => "highestDownvotes",
        }
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            SortMode::Newest => "NEWEST",
            SortMode::Oldest => "OLDEST",
            SortMode::MostUpvoted => "MOST_UPVOTED",
            SortMode::MostDownvoted => "MOST_DOWNVOTED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Newest => "Newest Posts",
            SortMode::Oldest => "Oldest Posts",
            SortMode::MostUpvoted => "Most Likes",
            SortMode::MostDownvoted => "Most Dislikes",
        }
    }

    /// Looks a mode up by its view key or canonical name.
    ///
    /// Unknown keys are rejected instead of falling back to leaving the list
    /// unsorted.
    pub fn lookup(key: &str) -> Result<Self, ListError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.key() == key || mode.canonical_name() == key)
            .ok_or_else(|| ListError::invalid(format!("unknown sort mode `{key}`")))
    }

    pub fn comparator<T>(self) -> Comparator<T>
    where
        T: PostedOn + Engagement,
    {
        match self {
            SortMode::Newest => newest_first::<T>,
            SortMode::Oldest => oldest_first::<T>,
            SortMode::MostUpvoted => most_upvoted_first::<T>,
            SortMode::MostDownvoted => most_downvoted_first::<T>,
        }
    }
}

fn newest_first<T: PostedOn>(a: &T, b: &T) -> Ordering {
    b.posted_on().cmp(&a.posted_on())
}

fn oldest_first<T: PostedOn>(a: &T, b: &T) -> Ordering {
    a.posted_on().cmp(&b.posted_on())
}

fn most_upvoted_first<T: Engagement>(a: &T, b: &T) -> Ordering {
    b.upvotes().cmp(&a.upvotes())
}

fn most_downvoted_first<T: Engagement>(a: &T, b: &T) -> Ordering {
    b.downvotes().cmp(&a.downvotes())
}

impl FromStr for SortMode {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for SortMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for SortMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;

        Self::lookup(&key).map_err(serde::de::Error::custom)
    }
}

/// Orders `records` by `mode` without touching the input.
///
/// The sort is stable, so records with equal keys keep their input order.
#[instrument(skip(records), fields(records = records.len()))]
pub fn sort<T>(records: &[T], mode: SortMode) -> Vec<&T>
where
    T: PostedOn + Engagement,
{
    let compare = mode.comparator::<T>();

    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by(|a, b| compare(a, b));

    sorted
}
