//! Content records for the portfolio site and the list engine every list
//! view shares: sort by a [`SortMode`], then cut one page out of the result.

pub mod comments;
pub mod date;
pub mod error;
pub mod gallery;
pub mod page;
pub mod record;
pub mod season;
pub mod sort;
pub mod title;
pub mod users;

pub use error::ListError;
pub use page::{count_pages, paginate, present_page, PageRequest, PageResult};
pub use record::{ContentRecord, ContentRecords};
pub use sort::{sort, SortMode};
