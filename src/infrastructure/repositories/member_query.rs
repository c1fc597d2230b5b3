//! SQL for the member/team search projection
//!
//! Filters are rendered as bound parameters; only whitelisted column names
//! are ever interpolated into the statement text.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::search::{MemberFilter, MemberPredicate, PageRequest, Sort, SortProperty};

const MEMBER_TEAM_SELECT: &str = "SELECT m.id AS member_id, m.username, m.age, \
     t.id AS team_id, t.name AS team_name \
     FROM members m LEFT JOIN teams t ON t.id = m.team_id";

const MEMBER_TEAM_COUNT: &str =
    "SELECT COUNT(*) FROM members m LEFT JOIN teams t ON t.id = m.team_id";

/// `SELECT` of projected rows, ordered by `sort` when it is non-empty
pub fn select_member_teams(
    filter: &MemberFilter,
    sort: &[Sort],
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(MEMBER_TEAM_SELECT);
    push_filter(&mut builder, filter);
    push_order(&mut builder, sort);
    builder
}

/// `SELECT` of a single page of projected rows
pub fn select_member_team_page(
    filter: &MemberFilter,
    request: &PageRequest,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = select_member_teams(filter, request.sort());
    builder
        .push(" LIMIT ")
        .push_bind(i64::from(request.size()))
        .push(" OFFSET ")
        .push_bind(i64::try_from(request.offset()).unwrap_or(i64::MAX));
    builder
}

/// `SELECT COUNT(*)` over the same join and filter
pub fn count_member_teams(filter: &MemberFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(MEMBER_TEAM_COUNT);
    push_filter(&mut builder, filter);
    builder
}

fn push_filter(builder: &mut QueryBuilder<'static, Postgres>, filter: &MemberFilter) {
    if filter.is_match_all() {
        return;
    }

    builder.push(" WHERE ");
    let mut separated = builder.separated(" AND ");
    for clause in filter.clauses() {
        match clause {
            MemberPredicate::UsernameEq(username) => {
                separated.push("m.username = ");
                separated.push_bind_unseparated(username.clone());
            }
            MemberPredicate::TeamNameEq(team_name) => {
                separated.push("t.name = ");
                separated.push_bind_unseparated(team_name.clone());
            }
            MemberPredicate::AgeGoe(age) => {
                separated.push("m.age >= ");
                separated.push_bind_unseparated(*age);
            }
            MemberPredicate::AgeLoe(age) => {
                separated.push("m.age <= ");
                separated.push_bind_unseparated(*age);
            }
        }
    }
}

fn push_order(builder: &mut QueryBuilder<'static, Postgres>, sort: &[Sort]) {
    if sort.is_empty() {
        return;
    }

    builder.push(" ORDER BY ");
    let mut separated = builder.separated(", ");
    for order in sort {
        separated.push(sort_column(order.property));
        separated.push_unseparated(" ");
        separated.push_unseparated(order.direction.to_string());
    }
}

fn sort_column(property: SortProperty) -> &'static str {
    match property {
        SortProperty::Id => "m.id",
        SortProperty::Username => "m.username",
        SortProperty::Age => "m.age",
        SortProperty::TeamName => "t.name",
    }
}
