use std::sync::Arc;

use crate::domain::errors::RepositoryResult;
use crate::domain::repositories::MemberSearchRepository;
use crate::domain::search::{
    CountStrategy, MemberFilter, MemberSearchCondition, MemberTeamDto, Page, PageRequest, Sort,
};

/// Member search over the member/team join
///
/// Turns a [`MemberSearchCondition`] into a [`MemberFilter`] and runs it
/// through a [`MemberSearchRepository`]. Performs no validation of its own;
/// paging input arrives already checked as a [`PageRequest`].
#[derive(Clone)]
pub struct MemberSearchService {
    repository: Arc<dyn MemberSearchRepository>,
}

impl MemberSearchService {
    pub fn new(repository: Arc<dyn MemberSearchRepository>) -> Self {
        Self { repository }
    }

    /// All matching rows, unpaged
    pub async fn search(
        &self,
        condition: &MemberSearchCondition,
        sort: &[Sort],
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        let filter = MemberFilter::from_condition(condition);
        tracing::debug!(clauses = filter.clauses().len(), "Searching members");

        self.repository.fetch(&filter, sort).await
    }

    /// One page of matching rows; the count query always runs
    pub async fn search_page_simple(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> RepositoryResult<Page<MemberTeamDto>> {
        self.search_page(condition, request, CountStrategy::Always)
            .await
    }

    /// One page of matching rows; the count query is skipped when the page
    /// already reveals the total
    pub async fn search_page_complex(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> RepositoryResult<Page<MemberTeamDto>> {
        self.search_page(condition, request, CountStrategy::WhenNeeded)
            .await
    }

    pub async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
        strategy: CountStrategy,
    ) -> RepositoryResult<Page<MemberTeamDto>> {
        let filter = MemberFilter::from_condition(condition);

        let (content, total) = match strategy {
            CountStrategy::Always => {
                tokio::try_join!(
                    self.repository.fetch_page(&filter, request),
                    self.repository.count(&filter)
                )?
            }
            CountStrategy::WhenNeeded => {
                let content = self.repository.fetch_page(&filter, request).await?;
                let total = match strategy.known_total(request, content.len()) {
                    Some(total) => {
                        tracing::debug!(total, "Count query elided");
                        total
                    }
                    None => self.repository.count(&filter).await?,
                };
                (content, total)
            }
        };

        tracing::debug!(
            page = request.page(),
            size = request.size(),
            returned = content.len(),
            total,
            ?strategy,
            "Searched member page"
        );

        Ok(Page::new(content, request, total))
    }
}
