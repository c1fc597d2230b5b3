use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;
use crate::domain::search::{MemberFilter, MemberTeamDto, PageRequest, Sort};

/// Read side of the member/team join
///
/// Implementations run a single query per call. Combining fetches and
/// counts into pages is left to the search service.
#[async_trait]
pub trait MemberSearchRepository: Send + Sync {
    /// Every projected row matching `filter`
    async fn fetch(
        &self,
        filter: &MemberFilter,
        sort: &[Sort],
    ) -> RepositoryResult<Vec<MemberTeamDto>>;

    /// The rows of one page matching `filter`
    async fn fetch_page(
        &self,
        filter: &MemberFilter,
        request: &PageRequest,
    ) -> RepositoryResult<Vec<MemberTeamDto>>;

    /// Number of rows matching `filter`
    async fn count(&self, filter: &MemberFilter) -> RepositoryResult<u64>;
}
