use sqlx::PgPool;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::member::{Member, Team, TeamRoster};
use crate::domain::repositories::TeamRepository;
use crate::infrastructure::repositories::{upsert_member, upsert_team, PostgresTeamRepository};

pub const SAMPLE_MEMBER_COUNT: i32 = 100;

/// Builds the sample teams and members without touching the database
///
/// `member{i}` has age `i` and belongs to `teamA` when `i` is even,
/// `teamB` otherwise.
pub fn sample_members() -> Result<(Vec<Team>, Vec<Member>), String> {
    let team_a = Team::new("teamA")?;
    let team_b = Team::new("teamB")?;

    let members = (0..SAMPLE_MEMBER_COUNT)
        .map(|i| {
            let team = if i % 2 == 0 { &team_a } else { &team_b };
            Member::new(format!("member{i}"), i, Some(team))
        })
        .collect();

    Ok((vec![team_a, team_b], members))
}

/// Seeds the sample dataset in one transaction
///
/// Skipped when `teamA` already exists. Returns whether rows were written.
pub async fn seed_sample_data(pool: &PgPool) -> RepositoryResult<bool> {
    let team_repo = PostgresTeamRepository::new(pool.clone());
    if team_repo.find_by_name("teamA").await?.is_some() {
        tracing::info!("Sample data already present, skipping seed");
        return Ok(false);
    }

    let (teams, members) = sample_members().map_err(|e| {
        RepositoryError::InvalidData(format!("Invalid sample data: {e}"))
    })?;

    let mut tx = pool.begin().await?;
    for team in &teams {
        upsert_team(&mut *tx, team).await?;
    }
    for member in &members {
        upsert_member(&mut *tx, member).await?;
    }
    tx.commit().await?;

    let roster = TeamRoster::index(&members);
    for team in &teams {
        tracing::info!(
            team = team.name(),
            members = roster.members_of(team).len(),
            "Seeded sample team"
        );
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_members_alternate_between_two_teams() {
        let (teams, members) = sample_members().unwrap();
        let roster = TeamRoster::index(&members);

        assert_eq!(members.len(), SAMPLE_MEMBER_COUNT as usize);
        assert_eq!(roster.members_of(&teams[0]).len(), 50);
        assert_eq!(roster.members_of(&teams[1]).len(), 50);
        assert!(members[0].belongs_to(&teams[0]));
        assert!(members[1].belongs_to(&teams[1]));
    }

    #[test]
    fn sample_member_age_matches_index() {
        let (_, members) = sample_members().unwrap();

        assert_eq!(members[42].username(), Some("member42"));
        assert_eq!(members[42].age(), 42);
    }
}
