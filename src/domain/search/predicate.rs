//! Dynamic predicate composition for member searches
//!
//! Each optional field of a [`MemberSearchCondition`] maps to at most one
//! [`MemberPredicate`]. Absent fields produce `None` and are dropped before
//! the remaining clauses are AND-ed together, so a missing filter never
//! takes part in the conjunction.

use super::condition::MemberSearchCondition;
use super::dto::MemberTeamDto;

/// A single filter clause over the member/team join
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberPredicate {
    UsernameEq(String),
    TeamNameEq(String),
    AgeGoe(i32),
    AgeLoe(i32),
}

impl MemberPredicate {
    /// Evaluates the clause against a projected row
    ///
    /// Follows SQL semantics: comparing against a missing value is false.
    pub fn matches(&self, row: &MemberTeamDto) -> bool {
        match self {
            MemberPredicate::UsernameEq(username) => {
                row.username.as_deref() == Some(username.as_str())
            }
            MemberPredicate::TeamNameEq(team_name) => {
                row.team_name.as_deref() == Some(team_name.as_str())
            }
            MemberPredicate::AgeGoe(age) => row.age >= *age,
            MemberPredicate::AgeLoe(age) => row.age <= *age,
        }
    }
}

/// Exact username match, absent for a missing or blank username
pub fn username_eq(username: Option<&str>) -> Option<MemberPredicate> {
    non_blank(username).map(|u| MemberPredicate::UsernameEq(u.to_string()))
}

/// Exact team name match, absent for a missing or blank name
pub fn team_name_eq(team_name: Option<&str>) -> Option<MemberPredicate> {
    non_blank(team_name).map(|t| MemberPredicate::TeamNameEq(t.to_string()))
}

pub fn age_goe(age: Option<i32>) -> Option<MemberPredicate> {
    age.map(MemberPredicate::AgeGoe)
}

pub fn age_loe(age: Option<i32>) -> Option<MemberPredicate> {
    age.map(MemberPredicate::AgeLoe)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Conjunction of present predicates
///
/// An empty filter matches every row.
///
/// # Example
/// ```
/// use member_search_api::domain::search::{MemberFilter, MemberSearchCondition};
///
/// let condition = MemberSearchCondition::new().with_team_name("teamB");
/// let filter = MemberFilter::from_condition(&condition);
///
/// assert_eq!(filter.clauses().len(), 1);
/// assert!(MemberFilter::match_all().is_match_all());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    clauses: Vec<MemberPredicate>,
}

impl MemberFilter {
    pub fn match_all() -> Self {
        Self::default()
    }

    pub fn from_condition(condition: &MemberSearchCondition) -> Self {
        [
            username_eq(condition.username.as_deref()),
            team_name_eq(condition.team_name.as_deref()),
            age_goe(condition.age_goe),
            age_loe(condition.age_loe),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Adds a clause if present; `None` leaves the filter unchanged
    pub fn and(mut self, clause: Option<MemberPredicate>) -> Self {
        self.clauses.extend(clause);
        self
    }

    pub fn clauses(&self) -> &[MemberPredicate] {
        &self.clauses
    }

    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn matches(&self, row: &MemberTeamDto) -> bool {
        self.clauses.iter().all(|clause| clause.matches(row))
    }
}

impl FromIterator<MemberPredicate> for MemberFilter {
    fn from_iter<I: IntoIterator<Item = MemberPredicate>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl From<&MemberSearchCondition> for MemberFilter {
    fn from(condition: &MemberSearchCondition) -> Self {
        Self::from_condition(condition)
    }
}
