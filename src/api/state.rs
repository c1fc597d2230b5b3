use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::MemberSearchRepository;
use crate::infrastructure::repositories::PostgresMemberRepository;
use crate::services::MemberSearchService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub members: MemberSearchService,
}

impl AppState {
    pub fn new(repository: Arc<dyn MemberSearchRepository>) -> Self {
        Self {
            members: MemberSearchService::new(repository),
        }
    }

    /// State backed by the PostgreSQL repositories
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PostgresMemberRepository::new(pool)))
    }
}
