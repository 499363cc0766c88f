use chrono::{DateTime, Utc};

use crate::sort::{sort, Engagement, SortMode};

pub trait PostedOn {
    fn posted_on(&self) -> DateTime<Utc>;
}

impl<T> PostedOn for &T
where
    T: PostedOn + ?Sized,
{
    fn posted_on(&self) -> DateTime<Utc> {
        (**self).posted_on()
    }
}

pub trait ByRecency<Item> {
    fn by_recency(&self) -> Vec<&Item>;
}

impl<T> ByRecency<T> for [T]
where
    T: PostedOn + Engagement,
{
    fn by_recency(&self) -> Vec<&T> {
        sort(self, SortMode::Newest)
    }
}

impl<T> ByRecency<T> for Vec<T>
where
    T: PostedOn + Engagement,
{
    fn by_recency(&self) -> Vec<&T> {
        self.as_slice().by_recency()
    }
}
