// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod member_query;
pub mod postgres_member_repository;
pub mod postgres_team_repository;

pub use postgres_member_repository::{upsert_member, PostgresMemberRepository};
pub use postgres_team_repository::{upsert_team, PostgresTeamRepository};
