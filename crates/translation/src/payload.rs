//! Lenient views over GitHub webhook payloads.
//!
//! GitHub payloads are large and their shape varies between event types,
//! actions, and hook configurations. Only the handful of fields used in the
//! rendered embeds are modelled here, and every one of them is optional:
//!
//! - an absent field, or an explicit `null`, becomes `None`;
//! - a field whose JSON type does not match (say, `commits` is a string)
//!   also becomes `None` rather than failing the whole payload;
//! - inside a list, an element that does not match is dropped and the
//!   remaining elements are kept;
//! - a payload that is not a JSON object at all yields the all-`None`
//!   default.
//!
//! Deserializing these types therefore never fails, and the translation rules
//! decide which default to show for each missing value.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Deserializes a field, turning a type mismatch into the field's default.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserializes a list field element by element, dropping elements that do
/// not match `T`. A value that is not an array becomes `None`.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
    ))
}

/// Parses `value` as `T`, falling back to `T::default()` when it is not an
/// object.
fn from_tree<T: DeserializeOwned + Default>(value: &Value) -> T {
    T::deserialize(value).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Shared objects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Repository {
    #[serde(default, deserialize_with = "lenient")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub html_url: Option<String>,
}

/// A GitHub account (`user`, `sender`, `author` objects).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Account {
    #[serde(default, deserialize_with = "lenient")]
    pub login: Option<String>,
}

/// Git identity attached to a pushed commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommitAuthor {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Commit {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<CommitAuthor>,
}

/// A head or base reference of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GitRef {
    #[serde(default, rename = "ref", deserialize_with = "lenient")]
    pub git_ref: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Label {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Event payloads
// ---------------------------------------------------------------------------

/// `ping`: Sent once when a webhook is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PingPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub zen: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<Repository>,
}

/// `push`: One or more commits (or a tag) pushed to a ref.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PushPayload {
    #[serde(default, rename = "ref", deserialize_with = "lenient")]
    pub git_ref: Option<String>,
    /// Compare view for the pushed range.
    #[serde(default, deserialize_with = "lenient")]
    pub compare: Option<String>,
    /// Pushed commits, oldest first.
    #[serde(default, deserialize_with = "lenient_list")]
    pub commits: Option<Vec<Commit>>,
    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<Repository>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<Account>,
    #[serde(default, deserialize_with = "lenient")]
    pub head: Option<GitRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub base: Option<GitRef>,
}

/// `pull_request`: Any activity on a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullRequestPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
    /// Top-level copy of the pull request number.
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub pull_request: Option<PullRequest>,
    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<Repository>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Issue {
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<Account>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub labels: Option<Vec<Label>>,
}

/// `issues`: Any activity on an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssuesPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub issue: Option<Issue>,
    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<Repository>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Release {
    #[serde(default, deserialize_with = "lenient")]
    pub tag_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<Account>,
}

/// `release`: Any activity on a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReleasePayload {
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub release: Option<Release>,
    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<Repository>,
}

/// Fields every event type may carry; used for unrecognized events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenericPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<Repository>,
}

macro_rules! impl_from_tree {
    ($($payload:ty),* $(,)?) => {
        $(
            impl $payload {
                /// Reads the payload from a JSON tree. Never fails; see the
                /// module documentation.
                pub fn from_tree(value: &Value) -> Self {
                    from_tree(value)
                }
            }
        )*
    };
}

impl_from_tree!(
    PingPayload,
    PushPayload,
    PullRequestPayload,
    IssuesPayload,
    ReleasePayload,
    GenericPayload,
);

impl Repository {
    /// Full name of an optional repository, if both are present and non-empty.
    pub(crate) fn full_name_of(repository: Option<&Repository>) -> Option<&str> {
        repository
            .and_then(|r| r.full_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}
