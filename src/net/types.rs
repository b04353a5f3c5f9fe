//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes (integer or string ids, list or
//! comma-joined model names, string or boolean review verdicts), so the
//! deserializers here accept every form it has been seen to emit and hand the
//! rest of the client one canonical representation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Authorization role assigned to a user by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Viewer,
    Creator,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Viewer, Role::Creator, Role::Admin];

    /// Parse the backend's role string. Unknown roles yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Viewer" => Some(Self::Viewer),
            "Creator" => Some(Self::Creator),
            "Admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Viewer => "Viewer",
            Self::Creator => "Creator",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response of `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    /// Raw role string; see [`Role::parse`].
    pub role: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Response of `POST /token`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body of `POST /register`. The backend names the field `hashed_password`
/// but hashes it server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
}

/// A row of `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
}

/// Body of `PUT /users/{id}/role`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoleChangeRequest {
    pub new_role: Role,
}

/// Body of `POST /tests/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTest {
    pub title: String,
    pub description: String,
    pub user_message: String,
    pub review_message: String,
    pub num_requests: u32,
    pub selected_llms: Vec<String>,
}

/// Response of `POST /tests/create`; only the id is consumed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedTest {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
}

/// One model response recorded for a test run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TestResult {
    pub model: String,
    /// `"TRUE"` when the review step accepted the response.
    #[serde(default, deserialize_with = "deserialize_verdict")]
    pub review_result: String,
    #[serde(default)]
    pub response: String,
}

impl TestResult {
    pub fn passed(&self) -> bool {
        self.review_result.trim().eq_ignore_ascii_case("TRUE")
    }
}

/// An evaluation test as returned by the `/tests` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Test {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user_message: String,
    #[serde(default)]
    pub review_message: String,
    #[serde(default)]
    pub num_requests: u32,
    #[serde(default, deserialize_with = "deserialize_model_list")]
    pub selected_llms: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_results")]
    pub results: Vec<TestResult>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) if !id.is_empty() => Ok(id),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected non-empty string or integer id")),
    }
}

fn deserialize_model_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::String(joined) => Ok(joined
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_owned)
            .collect()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(model) => Ok(model),
                _ => Err(D::Error::custom("expected model name string")),
            })
            .collect(),
        _ => Err(D::Error::custom("expected model list")),
    }
}

fn deserialize_results<'de, D>(deserializer: D) -> Result<Vec<TestResult>, D::Error>
where
    D: Deserializer<'de>,
{
    // Tests that have not run yet come back with `null` or `{}`.
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| TestResult::deserialize(item).map_err(D::Error::custom))
            .collect(),
        Value::Null | Value::Object(_) => Ok(Vec::new()),
        _ => Err(D::Error::custom("expected result list")),
    }
}

fn deserialize_verdict<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(verdict) => Ok(verdict),
        Value::Bool(true) => Ok("TRUE".to_owned()),
        Value::Bool(false) => Ok("FALSE".to_owned()),
        Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected verdict string or boolean")),
    }
}
