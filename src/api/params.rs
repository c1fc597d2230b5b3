use serde::Deserialize;

use crate::domain::search::{
    PageRequest, PageRequestError, Sort, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

/// Paging query parameters: `page`, `size`, `sort`
///
/// `page` is zero-based and defaults to 0. `size` defaults to 20 and is
/// capped at `MAX_PAGE_SIZE`. `sort` takes the form `property[,asc|desc]`
/// and may be repeated; orders apply in the given sequence.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    #[serde(default)]
    pub sort: Vec<String>,
}

impl TryFrom<PageParams> for PageRequest {
    type Error = PageRequestError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        let sort = parse_sort(&params.sort)?;
        let size = params
            .size
            .unwrap_or(i64::from(DEFAULT_PAGE_SIZE))
            .min(i64::from(MAX_PAGE_SIZE));
        let request = PageRequest::new(params.page.unwrap_or(0), size)?;

        Ok(request.with_sort(sort))
    }
}

/// Ordering for unpaged searches
#[derive(Debug, Default, Deserialize)]
pub struct SortParams {
    #[serde(default)]
    pub sort: Vec<String>,
}

impl SortParams {
    pub fn into_sort(self) -> Result<Vec<Sort>, PageRequestError> {
        parse_sort(&self.sort)
    }
}

fn parse_sort(raw: &[String]) -> Result<Vec<Sort>, PageRequestError> {
    raw.iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::SortProperty;

    #[test]
    fn missing_params_use_defaults() {
        let request = PageRequest::try_from(PageParams::default()).unwrap();

        assert_eq!(request, PageRequest::default());
    }

    #[test]
    fn params_with_sort() {
        let request = PageRequest::try_from(PageParams {
            page: Some(2),
            size: Some(5),
            sort: vec!["age,desc".to_string()],
        })
        .unwrap();

        assert_eq!(request.page(), 2);
        assert_eq!(request.size(), 5);
        assert_eq!(request.sort(), &[Sort::desc(SortProperty::Age)]);
    }

    #[test]
    fn repeated_sort_keys_keep_their_order() {
        let request = PageRequest::try_from(PageParams {
            sort: vec!["teamName".to_string(), "age,desc".to_string()],
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            request.sort(),
            &[
                Sort::asc(SortProperty::TeamName),
                Sort::desc(SortProperty::Age)
            ]
        );
    }

    #[test]
    fn oversized_page_size_is_capped() {
        let request = PageRequest::try_from(PageParams {
            size: Some(5000),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(request.size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn negative_size_is_rejected() {
        let result = PageRequest::try_from(PageParams {
            size: Some(-1),
            ..Default::default()
        });

        assert!(matches!(result, Err(PageRequestError::InvalidSize { .. })));
    }

    #[test]
    fn negative_page_is_rejected() {
        let result = PageRequest::try_from(PageParams {
            page: Some(-1),
            ..Default::default()
        });

        assert_eq!(result, Err(PageRequestError::InvalidPage(-1)));
    }

    #[test]
    fn blank_sort_is_ignored() {
        let sort = SortParams {
            sort: vec![" ".to_string()],
        }
        .into_sort()
        .unwrap();

        assert!(sort.is_empty());
    }
}
