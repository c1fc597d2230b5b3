//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use async_trait::async_trait;
use member_search_api::domain::errors::RepositoryResult;
use member_search_api::domain::member::{Member, Team};
use member_search_api::domain::repositories::MemberSearchRepository;
use member_search_api::domain::search::{
    Direction, MemberFilter, MemberTeamDto, PageRequest, Sort, SortProperty,
};
use member_search_api::infrastructure::seed::sample_members;

/// In-memory search repository that records how many queries it served
pub struct CountingSearchRepository {
    rows: Vec<MemberTeamDto>,
    fetches: AtomicUsize,
    counts: AtomicUsize,
}

impl CountingSearchRepository {
    pub fn new(rows: Vec<MemberTeamDto>) -> Self {
        Self {
            rows,
            fetches: AtomicUsize::new(0),
            counts: AtomicUsize::new(0),
        }
    }

    pub fn fetch_queries(&self) -> usize {
        self.fetches.load(AtomicOrdering::SeqCst)
    }

    pub fn count_queries(&self) -> usize {
        self.counts.load(AtomicOrdering::SeqCst)
    }

    fn matching(&self, filter: &MemberFilter, sort: &[Sort]) -> Vec<MemberTeamDto> {
        let mut rows: Vec<_> = self
            .rows
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();

        if !sort.is_empty() {
            rows.sort_by(|a, b| {
                sort.iter().fold(Ordering::Equal, |acc, order| {
                    acc.then_with(|| {
                        let ordering = compare(a, b, order.property);
                        match order.direction {
                            Direction::Asc => ordering,
                            Direction::Desc => ordering.reverse(),
                        }
                    })
                })
            });
        }

        rows
    }
}

fn compare(a: &MemberTeamDto, b: &MemberTeamDto, property: SortProperty) -> Ordering {
    match property {
        SortProperty::Id => a.member_id.cmp(&b.member_id),
        SortProperty::Username => a.username.cmp(&b.username),
        SortProperty::Age => a.age.cmp(&b.age),
        SortProperty::TeamName => a.team_name.cmp(&b.team_name),
    }
}

#[async_trait]
impl MemberSearchRepository for CountingSearchRepository {
    async fn fetch(
        &self,
        filter: &MemberFilter,
        sort: &[Sort],
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        self.fetches.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(self.matching(filter, sort))
    }

    async fn fetch_page(
        &self,
        filter: &MemberFilter,
        request: &PageRequest,
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        self.fetches.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(self
            .matching(filter, request.sort())
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size() as usize)
            .collect())
    }

    async fn count(&self, filter: &MemberFilter) -> RepositoryResult<u64> {
        self.counts.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(self.matching(filter, &[]).len() as u64)
    }
}

/// Projects a member and its team into a search row
pub fn project(member: &Member, teams: &[Team]) -> MemberTeamDto {
    let team = teams.iter().find(|t| member.belongs_to(t));
    MemberTeamDto {
        member_id: member.id(),
        username: member.username().map(str::to_string),
        age: member.age(),
        team_id: team.map(Team::id),
        team_name: team.map(|t| t.name().to_string()),
    }
}

/// teamA: member1 (10), member2 (20); teamB: member3 (30), member4 (40)
pub fn four_member_rows() -> Vec<MemberTeamDto> {
    let team_a = Team::new("teamA").unwrap();
    let team_b = Team::new("teamB").unwrap();
    let members = vec![
        Member::new("member1", 10, Some(&team_a)),
        Member::new("member2", 20, Some(&team_a)),
        Member::new("member3", 30, Some(&team_b)),
        Member::new("member4", 40, Some(&team_b)),
    ];
    let teams = vec![team_a, team_b];

    members.iter().map(|m| project(m, &teams)).collect()
}

/// The hundred-member sample dataset
pub fn hundred_member_rows() -> Vec<MemberTeamDto> {
    let (teams, members) = sample_members().unwrap();
    members.iter().map(|m| project(m, &teams)).collect()
}

pub fn usernames(rows: &[MemberTeamDto]) -> Vec<String> {
    rows.iter()
        .map(|r| r.username.clone().unwrap_or_default())
        .collect()
}
