use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryResult;
use crate::domain::member::{Member, Team};

/// Repository trait for Member entities
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Save a member (insert or update)
    async fn save(&self, member: &Member) -> RepositoryResult<()>;

    /// Find a member by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Member>>;

    /// Find all members, oldest first
    async fn find_all(&self) -> RepositoryResult<Vec<Member>>;

    /// Find members with an exact username
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>>;

    /// Find the members that reference a team
    async fn find_by_team(&self, team: &Team) -> RepositoryResult<Vec<Member>>;
}
