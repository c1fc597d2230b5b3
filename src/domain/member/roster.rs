use std::collections::HashMap;

use uuid::Uuid;

use super::member::Member;
use super::team::Team;

/// Reverse index from team id to the members that reference it
///
/// Built from a slice of members, so the team side can never disagree with
/// the member side.
#[derive(Debug, Default)]
pub struct TeamRoster<'a> {
    by_team: HashMap<Uuid, Vec<&'a Member>>,
}

impl<'a> TeamRoster<'a> {
    pub fn index(members: &'a [Member]) -> Self {
        let mut by_team: HashMap<Uuid, Vec<&'a Member>> = HashMap::new();
        for member in members {
            if let Some(team_id) = member.team_id() {
                by_team.entry(team_id).or_default().push(member);
            }
        }

        Self { by_team }
    }

    /// Members of `team`, in the order they appeared in the indexed slice
    pub fn members_of(&self, team: &Team) -> &[&'a Member] {
        self.by_team
            .get(&team.id())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, team: &Team, member: &Member) -> bool {
        self.members_of(team).iter().any(|m| m.id() == member.id())
    }

    /// Number of distinct teams with at least one member
    pub fn team_count(&self) -> usize {
        self.by_team.len()
    }
}
