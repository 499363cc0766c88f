use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    date::PostedOn,
    error::ListError,
    sort::{sort, Engagement, SortMode},
};

/// One page of a list, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Result<Self, ListError> {
        let page = Self {
            page_number,
            page_size,
        };
        page.validate()?;

        Ok(page)
    }

    pub fn validate(&self) -> Result<(), ListError> {
        if self.page_size == 0 {
            return Err(ListError::invalid("page size must be at least 1"));
        }
        if self.page_number == 0 {
            return Err(ListError::invalid("page number must be at least 1"));
        }

        Ok(())
    }

    /// Index of the first item on this page. Saturates for absurd page
    /// numbers, which then simply land past the end of any list.
    fn offset(&self) -> usize {
        (self.page_number - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<'a, T> {
    pub items: Vec<&'a T>,
    pub total_pages: usize,
    pub page_number: usize,
}

/// `ceil(total_items / page_size)`, so an empty list has zero pages.
pub fn count_pages(total_items: usize, page_size: usize) -> Result<usize, ListError> {
    if page_size == 0 {
        return Err(ListError::invalid("page size must be at least 1"));
    }

    Ok(total_items.div_ceil(page_size))
}

/// Cuts the requested page out of an already ordered list.
///
/// Pages past the end come back empty.
pub fn paginate<T: Clone>(ordered: &[T], page: PageRequest) -> Result<Vec<T>, ListError> {
    page.validate()?;

    Ok(ordered
        .iter()
        .skip(page.offset())
        .take(page.page_size)
        .cloned()
        .collect())
}

/// Sorts `records` by `mode` and returns the requested page of the result
/// along with the page count for the whole list.
#[instrument(skip(records), fields(records = records.len()))]
pub fn present_page<T>(
    records: &[T],
    mode: SortMode,
    page: PageRequest,
) -> Result<PageResult<'_, T>, ListError>
where
    T: PostedOn + Engagement,
{
    page.validate()?;

    let total_pages = count_pages(records.len(), page.page_size)?;
    let sorted = sort(records, mode);
    let items = paginate(&sorted, page)?;

    if items.is_empty() && !records.is_empty() {
        debug!(total_pages, "Requested page is past the end of the list");
    }

    Ok(PageResult {
        items,
        total_pages,
        page_number: page.page_number,
    })
}

#[cfg(test)]
mod test {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;

    use super::*;
    use crate::record::ContentRecord;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
    }

    fn scenario() -> Vec<ContentRecord> {
        vec![
            ContentRecord::new("a", t0()).with_votes(5, 1),
            ContentRecord::new("b", t0() + Duration::seconds(1)).with_votes(2, 9),
            ContentRecord::new("c", t0() + Duration::seconds(2)).with_votes(8, 0),
        ]
    }

    fn ids(items: &[&ContentRecord]) -> Vec<String> {
        items.iter().map(|r| r.id.clone()).collect()
    }

    fn records() -> impl Strategy<Value = Vec<ContentRecord>> {
        prop::collection::vec((0i64..1_000, 0u64..20, 0u64..20), 0..60).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (offset, up, down))| {
                    ContentRecord::new(format!("post-{i}"), t0() + Duration::minutes(offset))
                        .with_votes(up, down)
                })
                .collect()
        })
    }

    #[test]
    fn counts_pages_by_ceiling_division() {
        assert_eq!(count_pages(0, 6), Ok(0));
        assert_eq!(count_pages(10, 6), Ok(2));
        assert_eq!(count_pages(12, 6), Ok(2));
        assert_eq!(count_pages(13, 6), Ok(3));
        assert_eq!(count_pages(1, 1), Ok(1));
    }

    #[test]
    fn zero_page_size_is_invalid() {
        assert!(matches!(
            count_pages(10, 0),
            Err(ListError::InvalidArgument(_))
        ));
        assert!(matches!(
            PageRequest::new(1, 0),
            Err(ListError::InvalidArgument(_))
        ));
    }

    #[test]
    fn zero_page_number_is_invalid() {
        let page = PageRequest {
            page_number: 0,
            page_size: 6,
        };

        assert!(matches!(
            paginate(&[1, 2, 3], page),
            Err(ListError::InvalidArgument(_))
        ));
        assert!(matches!(
            present_page(&scenario(), SortMode::Newest, page),
            Err(ListError::InvalidArgument(_))
        ));
    }

    #[test]
    fn paginate_clips_to_the_list() {
        let items = [1, 2, 3, 4, 5, 6, 7];

        assert_eq!(paginate(&items, PageRequest::new(1, 3).unwrap()), Ok(vec![1, 2, 3]));
        assert_eq!(paginate(&items, PageRequest::new(3, 3).unwrap()), Ok(vec![7]));
        assert_eq!(paginate(&items, PageRequest::new(4, 3).unwrap()), Ok(vec![]));
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let page = PageRequest::new(usize::MAX, usize::MAX).unwrap();

        assert_eq!(paginate(&[1, 2, 3], page), Ok(vec![]));
    }

    #[test]
    fn concrete_scenario() {
        let posts = scenario();

        assert_eq!(ids(&sort(&posts, SortMode::Newest)), vec!["c", "b", "a"]);
        assert_eq!(ids(&sort(&posts, SortMode::Oldest)), vec!["a", "b", "c"]);
        assert_eq!(ids(&sort(&posts, SortMode::MostUpvoted)), vec!["c", "a", "b"]);
        assert_eq!(ids(&sort(&posts, SortMode::MostDownvoted)), vec!["b", "a", "c"]);

        let page = present_page(&posts, SortMode::Newest, PageRequest::new(1, 2).unwrap()).unwrap();
        assert_eq!(ids(&page.items), vec!["c", "b"]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page_number, 1);

        let page = present_page(&posts, SortMode::Newest, PageRequest::new(2, 2).unwrap()).unwrap();
        assert_eq!(ids(&page.items), vec!["a"]);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let posts: Vec<ContentRecord> = vec![];
        let page = present_page(&posts, SortMode::Oldest, PageRequest::default()).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page_number, 1);
    }

    #[test]
    fn unknown_mode_key_is_invalid() {
        let err = "bogus-mode".parse::<SortMode>().unwrap_err();

        assert!(matches!(err, ListError::InvalidArgument(_)));
    }

    #[test]
    fn page_result_serializes_in_camel_case() {
        let posts = scenario();
        let page = present_page(&posts, SortMode::MostUpvoted, PageRequest::new(1, 1).unwrap()).unwrap();
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["pageNumber"], 1);
        assert_eq!(json["items"][0]["_id"], "c");
    }

    proptest! {
        #[test]
        fn pages_reassemble_the_sorted_list(posts in records(), size in 1usize..10) {
            let expected = ids(&sort(&posts, SortMode::Newest));
            let total = count_pages(posts.len(), size).unwrap();

            let mut seen = vec![];
            for number in 1..=total {
                let page = present_page(&posts, SortMode::Newest, PageRequest::new(number, size).unwrap()).unwrap();
                prop_assert!(!page.items.is_empty());
                prop_assert!(page.items.len() <= size);
                prop_assert_eq!(page.total_pages, total);
                seen.extend(ids(&page.items));
            }

            prop_assert_eq!(seen, expected);
        }

        #[test]
        fn far_pages_are_empty(posts in records(), mode in prop::sample::select(SortMode::ALL.to_vec())) {
            let page = present_page(&posts, mode, PageRequest::new(999, 6).unwrap()).unwrap();

            prop_assert!(page.items.is_empty());
            prop_assert_eq!(page.page_number, 999);
        }
    }
}
