use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use super::member_query;
use crate::domain::errors::RepositoryResult;
use crate::domain::member::{Member, Team};
use crate::domain::repositories::{MemberRepository, MemberSearchRepository};
use crate::domain::search::{MemberFilter, MemberTeamDto, PageRequest, Sort};

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    username: Option<String>,
    age: i32,
    team_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl MemberRow {
    fn into_member(self) -> Member {
        Member::from_persistence(self.id, self.username, self.age, self.team_id, self.created_at)
    }
}

/// Inserts or updates a member using any Postgres executor
///
/// Shared by [`PostgresMemberRepository::save`] and transactional callers.
pub async fn upsert_member<'e, E>(executor: E, member: &Member) -> RepositoryResult<()>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO members (id, username, age, team_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (id) DO UPDATE SET
            username = EXCLUDED.username,
            age = EXCLUDED.age,
            team_id = EXCLUDED.team_id
        "#,
    )
    .bind(member.id())
    .bind(member.username())
    .bind(member.age())
    .bind(member.team_id())
    .bind(member.created_at())
    .execute(executor)
    .await?;

    Ok(())
}

/// PostgreSQL implementation of MemberRepository and MemberSearchRepository
///
/// Search queries are assembled at runtime with `sqlx::QueryBuilder`, so
/// only the clauses of present filters reach the database.
#[derive(Clone)]
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    /// Creates a new PostgresMemberRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn save(&self, member: &Member) -> RepositoryResult<()> {
        upsert_member(&self.pool, member).await
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Member>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, username, age, team_id, created_at
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MemberRow::into_member))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, username, age, team_id, created_at
            FROM members
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MemberRow::into_member).collect())
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, username, age, team_id, created_at
            FROM members
            WHERE username = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MemberRow::into_member).collect())
    }

    async fn find_by_team(&self, team: &Team) -> RepositoryResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, username, age, team_id, created_at
            FROM members
            WHERE team_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(team.id())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MemberRow::into_member).collect())
    }
}

#[async_trait]
impl MemberSearchRepository for PostgresMemberRepository {
    async fn fetch(
        &self,
        filter: &MemberFilter,
        sort: &[Sort],
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        let mut builder = member_query::select_member_teams(filter, sort);
        let rows = builder
            .build_query_as::<MemberTeamDto>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn fetch_page(
        &self,
        filter: &MemberFilter,
        request: &PageRequest,
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        let mut builder = member_query::select_member_team_page(filter, request);
        let rows = builder
            .build_query_as::<MemberTeamDto>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn count(&self, filter: &MemberFilter) -> RepositoryResult<u64> {
        let mut builder = member_query::count_member_teams(filter);
        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
