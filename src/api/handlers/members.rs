use axum::{extract::State, Json};
use axum_extra::extract::{Query, QueryRejection};

use crate::api::errors::ApiError;
use crate::api::params::{PageParams, SortParams};
use crate::api::state::AppState;
use crate::domain::search::{MemberSearchCondition, MemberTeamDto, Page, PageRequest};

// Query strings are bound with `axum_extra::extract::Query` so `sort` may
// repeat. Rejections are turned into `ApiError` to keep the JSON error body.

/// Search members without paging
///
/// GET /v1/members
pub async fn search_member_v1(
    State(state): State<AppState>,
    condition: Result<Query<MemberSearchCondition>, QueryRejection>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> Result<Json<Vec<MemberTeamDto>>, ApiError> {
    let Query(condition) = condition?;
    let Query(params) = params?;

    let sort = params.into_sort()?;
    let members = state.members.search(&condition, &sort).await?;

    Ok(Json(members))
}

/// Search members one page at a time, always counting the total
///
/// GET /v2/members
pub async fn search_member_v2(
    State(state): State<AppState>,
    condition: Result<Query<MemberSearchCondition>, QueryRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Page<MemberTeamDto>>, ApiError> {
    let Query(condition) = condition?;
    let Query(params) = params?;

    let request = PageRequest::try_from(params)?;
    let page = state
        .members
        .search_page_simple(&condition, &request)
        .await?;

    Ok(Json(page))
}

/// Search members one page at a time, counting only when needed
///
/// GET /v3/members
pub async fn search_member_v3(
    State(state): State<AppState>,
    condition: Result<Query<MemberSearchCondition>, QueryRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Page<MemberTeamDto>>, ApiError> {
    let Query(condition) = condition?;
    let Query(params) = params?;

    let request = PageRequest::try_from(params)?;
    let page = state
        .members
        .search_page_complex(&condition, &request)
        .await?;

    Ok(Json(page))
}
