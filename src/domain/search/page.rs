use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Rejected paging or sort input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    #[error("Page index out of range: {0}")]
    InvalidPage(i64),

    #[error("Page size must be between 1 and {max}: {size}")]
    InvalidSize { size: i64, max: u32 },

    #[error("Unknown sort property: {0}")]
    UnknownSortProperty(String),

    #[error("Invalid sort direction: {0}")]
    InvalidSortDirection(String),
}

/// Member/team properties a search can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortProperty {
    Id,
    Username,
    Age,
    TeamName,
}

impl FromStr for SortProperty {
    type Err = PageRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(SortProperty::Id),
            "username" => Ok(SortProperty::Username),
            "age" => Ok(SortProperty::Age),
            "teamName" => Ok(SortProperty::TeamName),
            other => Err(PageRequestError::UnknownSortProperty(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = PageRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(PageRequestError::InvalidSortDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "ASC"),
            Direction::Desc => write!(f, "DESC"),
        }
    }
}

/// Single-property ordering, parsed from `property[,asc|desc]`
///
/// # Example
/// ```
/// use member_search_api::domain::search::{Direction, Sort, SortProperty};
///
/// let sort: Sort = "age,desc".parse().unwrap();
/// assert_eq!(sort, Sort::new(SortProperty::Age, Direction::Desc));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub property: SortProperty,
    pub direction: Direction,
}

impl Sort {
    pub fn new(property: SortProperty, direction: Direction) -> Self {
        Self {
            property,
            direction,
        }
    }

    pub fn asc(property: SortProperty) -> Self {
        Self::new(property, Direction::Asc)
    }

    pub fn desc(property: SortProperty) -> Self {
        Self::new(property, Direction::Desc)
    }
}

impl FromStr for Sort {
    type Err = PageRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (property, direction) = match s.split_once(',') {
            Some((property, direction)) => (property, direction.parse()?),
            None => (s, Direction::Asc),
        };

        Ok(Self::new(property.parse()?, direction))
    }
}

/// Zero-based page index, page size and ordering
///
/// # Invariants
/// - `size` is in `1..=MAX_PAGE_SIZE`
/// - `sort` is applied in order; empty means natural order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Vec<Sort>,
}

impl PageRequest {
    /// Creates a page request
    ///
    /// # Returns
    /// * `Err(PageRequestError)` - If `page` is negative or `size` is out of range
    pub fn new(page: i64, size: i64) -> Result<Self, PageRequestError> {
        if size < 1 || size > i64::from(MAX_PAGE_SIZE) {
            return Err(PageRequestError::InvalidSize {
                size,
                max: MAX_PAGE_SIZE,
            });
        }

        let page = u32::try_from(page).map_err(|_| PageRequestError::InvalidPage(page))?;

        Ok(Self {
            page,
            size: size as u32,
            sort: Vec::new(),
        })
    }

    pub fn with_sort(mut self, sort: Vec<Sort>) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> &[Sort] {
        &self.sort
    }

    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

/// How a paged search obtains its total element count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountStrategy {
    /// Always issue the count query
    Always,
    /// Derive the total from the fetched page when it is knowable
    WhenNeeded,
}

impl CountStrategy {
    /// Returns the total if it can be derived without a count query
    ///
    /// An under-full page is the last one, so its total is
    /// `offset + content_len`. An empty page past the first says nothing
    /// about the total.
    pub fn known_total(&self, request: &PageRequest, content_len: usize) -> Option<u64> {
        match self {
            CountStrategy::Always => None,
            CountStrategy::WhenNeeded => {
                let content_len = content_len as u64;
                let offset = request.offset();

                if content_len >= u64::from(request.size()) {
                    None
                } else if offset == 0 {
                    Some(content_len)
                } else if content_len > 0 {
                    Some(offset + content_len)
                } else {
                    None
                }
            }
        }
    }
}

/// A bounded slice of a result set with total-count metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    content: Vec<T>,
    total_elements: u64,
    total_pages: u64,
    page_number: u32,
    page_size: u32,
    number_of_elements: usize,
    first: bool,
    last: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let page_size = request.size();
        let total_pages = total_elements.div_ceil(u64::from(page_size));
        let page_number = request.page();

        Self {
            number_of_elements: content.len(),
            content,
            total_elements,
            total_pages,
            page_number,
            page_size,
            first: page_number == 0,
            last: u64::from(page_number) + 1 >= total_pages,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn is_first(&self) -> bool {
        self.first
    }

    pub fn is_last(&self) -> bool {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: i64, size: i64) -> PageRequest {
        PageRequest::new(page, size).unwrap()
    }

    #[test]
    fn negative_page_is_rejected() {
        assert_eq!(
            PageRequest::new(-1, 10),
            Err(PageRequestError::InvalidPage(-1))
        );
    }

    #[test]
    fn zero_and_oversized_page_sizes_are_rejected() {
        assert!(PageRequest::new(0, 0).is_err());
        assert!(PageRequest::new(0, -5).is_err());
        assert!(PageRequest::new(0, i64::from(MAX_PAGE_SIZE) + 1).is_err());
        assert!(PageRequest::new(0, i64::from(MAX_PAGE_SIZE)).is_ok());
    }

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(request(0, 10).offset(), 0);
        assert_eq!(request(3, 10).offset(), 30);
    }

    #[test]
    fn default_request_is_first_page_of_twenty() {
        let req = PageRequest::default();

        assert_eq!(req.page(), 0);
        assert_eq!(req.size(), DEFAULT_PAGE_SIZE);
        assert!(req.sort().is_empty());
    }

    #[test]
    fn parse_sort_with_and_without_direction() {
        assert_eq!(
            "username".parse::<Sort>().unwrap(),
            Sort::asc(SortProperty::Username)
        );
        assert_eq!(
            "teamName,DESC".parse::<Sort>().unwrap(),
            Sort::desc(SortProperty::TeamName)
        );
    }

    #[test]
    fn parse_sort_rejects_unknown_input() {
        assert_eq!(
            "password".parse::<Sort>(),
            Err(PageRequestError::UnknownSortProperty("password".to_string()))
        );
        assert!(matches!(
            "age,sideways".parse::<Sort>(),
            Err(PageRequestError::InvalidSortDirection(_))
        ));
    }

    #[test]
    fn always_strategy_never_knows_total() {
        assert_eq!(CountStrategy::Always.known_total(&request(0, 10), 3), None);
    }

    #[test]
    fn under_full_first_page_knows_total() {
        assert_eq!(
            CountStrategy::WhenNeeded.known_total(&request(0, 10), 3),
            Some(3)
        );
        assert_eq!(
            CountStrategy::WhenNeeded.known_total(&request(0, 10), 0),
            Some(0)
        );
    }

    #[test]
    fn full_page_needs_count() {
        assert_eq!(CountStrategy::WhenNeeded.known_total(&request(0, 10), 10), None);
        assert_eq!(CountStrategy::WhenNeeded.known_total(&request(2, 10), 10), None);
    }

    #[test]
    fn under_full_later_page_knows_total() {
        assert_eq!(
            CountStrategy::WhenNeeded.known_total(&request(2, 10), 4),
            Some(24)
        );
    }

    #[test]
    fn empty_later_page_needs_count() {
        assert_eq!(CountStrategy::WhenNeeded.known_total(&request(5, 10), 0), None);
    }

    #[test]
    fn page_metadata() {
        let page = Page::new(vec![1, 2, 3], &request(1, 3), 7);

        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.page_number(), 1);
        assert!(!page.is_first());
        assert!(!page.is_last());
        assert_eq!(page.content(), &[1, 2, 3]);
    }

    #[test]
    fn empty_result_is_single_first_and_last_page() {
        let page: Page<i32> = Page::new(vec![], &request(0, 20), 0);

        assert_eq!(page.total_pages(), 0);
        assert!(page.is_first());
        assert!(page.is_last());
    }

    #[test]
    fn page_serializes_camel_case() {
        let page = Page::new(vec!["a"], &request(0, 5), 1);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["pageSize"], 5);
        assert_eq!(json["numberOfElements"], 1);
        assert_eq!(json["content"][0], "a");
    }
}
