use serde::{Deserialize, Deserializer, Serialize};

/// Optional filters for a member search
///
/// Every field is optional; a condition with nothing set matches every
/// member. Bound from query strings with camelCase keys
/// (`username`, `teamName`, `ageGoe`, `ageLoe`). Empty values such as
/// `ageGoe=` are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchCondition {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    /// Inclusive lower age bound
    #[serde(default, deserialize_with = "empty_as_none")]
    pub age_goe: Option<i32>,
    /// Inclusive upper age bound
    #[serde(default, deserialize_with = "empty_as_none")]
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn with_age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn with_age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAge {
    Number(i32),
    Text(String),
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawAge>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawAge::Number(age)) => Ok(Some(age)),
        Some(RawAge::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawAge::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
