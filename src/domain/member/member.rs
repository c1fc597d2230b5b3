use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::team::Team;

/// Member entity
///
/// Owns the only persisted side of the member/team association. A team's
/// member list is derived from the members that reference it, so attaching
/// a member to a team keeps both sides consistent without back-pointers.
///
/// # Example
/// ```
/// use member_search_api::domain::member::{Member, Team};
///
/// let team = Team::new("teamA").expect("valid team");
/// let member = Member::new("member1", 10, Some(&team));
///
/// assert_eq!(member.team_id(), Some(team.id()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: Uuid,
    username: Option<String>,
    age: i32,
    team_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl Member {
    /// Creates a new Member, optionally attached to a team
    ///
    /// When `team` is `None` no association is recorded.
    pub fn new(username: impl Into<String>, age: i32, team: Option<&Team>) -> Self {
        let mut member = Self {
            id: Uuid::new_v4(),
            username: Some(username.into()),
            age,
            team_id: None,
            created_at: Utc::now(),
        };

        if let Some(team) = team {
            member.attach_to_team(team);
        }

        member
    }

    /// Points this member at `team`, replacing any previous team
    pub fn attach_to_team(&mut self, team: &Team) {
        self.team_id = Some(team.id());
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn team_id(&self) -> Option<Uuid> {
        self.team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true if this member belongs to `team`
    pub fn belongs_to(&self, team: &Team) -> bool {
        self.team_id == Some(team.id())
    }

    /// Reconstructs a Member from persistence layer data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: Uuid,
        username: Option<String>,
        age: i32,
        team_id: Option<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            age,
            team_id,
            created_at,
        }
    }
}
