//! Translation of GitHub events into Discord embeds.
//!
//! [`translate`] classifies the event and runs exactly one rule. Each rule
//! reads its payload through the lenient views in [`crate::payload`], so a
//! missing or mistyped field resolves to one of the defaults below instead of
//! failing. Rules are pure apart from reading the clock in [`translate`];
//! [`translate_at`] takes the timestamp explicitly.
//!
//! | Event | Produces a message when | Color |
//! |-------|-------------------------|-------|
//! | `ping` | always | informational |
//! | `push` | at least one commit was pushed | neutral |
//! | `pull_request` | always | by action |
//! | `issues` | action is `opened`, `closed`, or `reopened` | by action |
//! | `release` | action is `published` | green |
//! | anything else | always (generic notice) | neutral |

use serde_json::Value;
use tracing::debug;

use crate::payload::{
    Account, Commit, GenericPayload, GitRef, IssuesPayload, PingPayload, PullRequestPayload,
    PushPayload, ReleasePayload, Repository,
};
use crate::text::{ellipsize, first_line, title_case, truncate_chars};
use crate::{
    BranchName, CommitSha, EmbedColor, EmbedField, EventKind, InboundEvent, OutboundMessage,
    Timestamp, TranslationResult,
};

// ---------------------------------------------------------------------------
// Defaults for absent payload fields
// ---------------------------------------------------------------------------

/// Shown for a missing repository name, login, author, ref, commit id, tag, or
/// action.
pub const UNKNOWN: &str = "unknown";

/// Shown for a pull request or issue without a title.
pub const UNTITLED: &str = "Untitled";

/// Shown after `#` for a pull request or issue without a number.
pub const UNKNOWN_NUMBER: &str = "?";

/// Shown in the `Labels` field of an issue without labels.
pub const NO_LABELS: &str = "None";

// ---------------------------------------------------------------------------
// Rendering limits
// ---------------------------------------------------------------------------

/// Longest commit subject line shown, in characters.
pub const COMMIT_SUBJECT_MAX_CHARS: usize = 100;

/// Number of recent commits listed in the `Commits` field of a push.
pub const MAX_LISTED_COMMITS: usize = 5;

/// Longest release body excerpt shown, in characters.
pub const RELEASE_BODY_MAX_CHARS: usize = 200;

/// Appended to a release body excerpt that was cut.
pub const RELEASE_BODY_ELLIPSIS: &str = "...";

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Translates one event, stamping the message with the current UTC time.
pub fn translate(event: &InboundEvent) -> TranslationResult {
    translate_at(event, Timestamp::now())
}

/// Translates one event, stamping the message with `timestamp`.
pub fn translate_at(event: &InboundEvent, timestamp: Timestamp) -> TranslationResult {
    let kind = event.kind();
    let payload = event.payload();

    let result = match &kind {
        EventKind::Ping => ping(payload, timestamp),
        EventKind::Push => push(payload, timestamp),
        EventKind::PullRequest => pull_request(payload, timestamp),
        EventKind::Issues => issues(payload, timestamp),
        EventKind::Release => release(payload, timestamp),
        EventKind::Other(tag) => fallback(tag, payload, timestamp),
    };

    debug!(
        event = %kind,
        supported = kind.is_supported(),
        suppressed = result.is_suppressed(),
        "Translated GitHub event"
    );
    result
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

fn ping(payload: &Value, timestamp: Timestamp) -> TranslationResult {
    let payload = PingPayload::from_tree(payload);

    let description = match Repository::full_name_of(payload.repository.as_ref()) {
        Some(name) => format!("Webhook successfully connected to repository: **{name}**"),
        None => "Webhook successfully connected".to_owned(),
    };

    let mut message = OutboundMessage::new(
        "🏓 GitHub Webhook Connected",
        EmbedColor::INFORMATIONAL,
        timestamp,
    )
    .with_description(description);

    if let Some(zen) = non_empty(payload.zen.as_deref()) {
        message = message.with_field(EmbedField::block("Zen", zen));
    }

    message.into()
}

fn push(payload: &Value, timestamp: Timestamp) -> TranslationResult {
    let payload = PushPayload::from_tree(payload);
    let commits = payload.commits.unwrap_or_default();

    // Tag pushes and branch deletions carry no commits.
    let Some(latest) = commits.last() else {
        return TranslationResult::Suppressed;
    };

    let branch = payload.git_ref.as_deref().and_then(BranchName::from_ref);
    let branch = branch.as_ref().map_or(UNKNOWN, BranchName::as_str);
    let repository = Repository::full_name_of(payload.repository.as_ref()).unwrap_or(UNKNOWN);

    let latest_value = match non_empty(latest.url.as_deref()) {
        Some(url) => format!("[{}]({url}) {}", short_id(latest), commit_subject(latest)),
        None => commit_line(latest),
    };

    let mut message = OutboundMessage::new(
        format!("📝 Push to {branch}"),
        EmbedColor::NEUTRAL,
        timestamp,
    )
    .with_description(format!("{} commit(s) pushed to {repository}", commits.len()))
    .with_url(payload.compare.as_deref())
    .with_field(EmbedField::block("Latest Commit", latest_value.trim_end()))
    .with_field(EmbedField::inline("Author", commit_author(latest)))
    .with_field(EmbedField::inline("Branch", branch));

    if commits.len() > 1 {
        message = message.with_field(EmbedField::block("Commits", commit_list(&commits)));
    }

    message.into()
}

fn pull_request(payload: &Value, timestamp: Timestamp) -> TranslationResult {
    let payload = PullRequestPayload::from_tree(payload);
    let action = non_empty(payload.action.as_deref()).unwrap_or(UNKNOWN);
    let pr = payload.pull_request.unwrap_or_default();

    let number = display_number(pr.number.or(payload.number));
    let title = non_empty(pr.title.as_deref()).unwrap_or(UNTITLED);
    let head = ref_name(pr.head.as_ref());
    let base = ref_name(pr.base.as_ref());

    OutboundMessage::new(
        format!("🔀 Pull Request {}", title_case(action)),
        pull_request_color(action),
        timestamp,
    )
    .with_description(format!("#{number}: {title}"))
    .with_url(pr.html_url.as_deref())
    .with_field(EmbedField::inline("Author", login(pr.user.as_ref())))
    .with_field(EmbedField::inline("Branch", format!("{head} → {base}")))
    .into()
}

fn issues(payload: &Value, timestamp: Timestamp) -> TranslationResult {
    let payload = IssuesPayload::from_tree(payload);
    let action = payload.action.as_deref().unwrap_or("");

    let Some(color) = issue_color(action) else {
        return TranslationResult::Suppressed;
    };

    let issue = payload.issue.unwrap_or_default();
    let number = display_number(issue.number);
    let title = non_empty(issue.title.as_deref()).unwrap_or(UNTITLED);

    let labels: Vec<&str> = issue
        .labels
        .iter()
        .flatten()
        .filter_map(|label| non_empty(label.name.as_deref()))
        .collect();
    let labels = if labels.is_empty() {
        NO_LABELS.to_owned()
    } else {
        labels.join(", ")
    };

    OutboundMessage::new(
        format!("🐛 Issue {}", title_case(action)),
        color,
        timestamp,
    )
    .with_description(format!("#{number}: {title}"))
    .with_url(issue.html_url.as_deref())
    .with_field(EmbedField::inline("Author", login(issue.user.as_ref())))
    .with_field(EmbedField::inline("Labels", labels))
    .into()
}

fn release(payload: &Value, timestamp: Timestamp) -> TranslationResult {
    let payload = ReleasePayload::from_tree(payload);
    if payload.action.as_deref() != Some("published") {
        return TranslationResult::Suppressed;
    }

    let release = payload.release.unwrap_or_default();
    let tag = non_empty(release.tag_name.as_deref()).unwrap_or(UNKNOWN);
    let name = non_empty(release.name.as_deref()).unwrap_or(tag);
    let body = release.body.as_deref().unwrap_or("");

    let mut description = format!("**{name}**");
    if !body.is_empty() {
        description.push_str("\n\n");
        description.push_str(&ellipsize(
            body,
            RELEASE_BODY_MAX_CHARS,
            RELEASE_BODY_ELLIPSIS,
        ));
    }

    OutboundMessage::new(
        format!("🚀 New Release: {tag}"),
        EmbedColor::GREEN,
        timestamp,
    )
    .with_description(description)
    .with_url(release.html_url.as_deref())
    .with_field(EmbedField::inline("Tag", tag))
    .with_field(EmbedField::inline("Author", login(release.author.as_ref())))
    .into()
}

/// Generic notice for event types without a dedicated rule.
fn fallback(tag: &str, payload: &Value, timestamp: Timestamp) -> TranslationResult {
    let payload = GenericPayload::from_tree(payload);
    let repository = Repository::full_name_of(payload.repository.as_ref()).unwrap_or(UNKNOWN);

    let mut message = OutboundMessage::new(
        format!("🔔 GitHub Event: {tag}"),
        EmbedColor::NEUTRAL,
        timestamp,
    )
    .with_description(format!("Event received from **{repository}**"));

    if let Some(action) = non_empty(payload.action.as_deref()) {
        message = message.with_field(EmbedField::inline("Action", action));
    }

    message.into()
}

// ---------------------------------------------------------------------------
// Color tables
// ---------------------------------------------------------------------------

fn pull_request_color(action: &str) -> EmbedColor {
    match action {
        "opened" => EmbedColor::GREEN,
        "closed" => EmbedColor::RED,
        "merged" => EmbedColor::PURPLE,
        "reopened" => EmbedColor::YELLOW,
        _ => EmbedColor::NEUTRAL,
    }
}

/// `None` means the action is not announced.
fn issue_color(action: &str) -> Option<EmbedColor> {
    match action {
        "opened" => Some(EmbedColor::GREEN),
        "closed" => Some(EmbedColor::RED),
        "reopened" => Some(EmbedColor::YELLOW),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn login(account: Option<&Account>) -> &str {
    non_empty(account.and_then(|a| a.login.as_deref())).unwrap_or(UNKNOWN)
}

fn ref_name(git_ref: Option<&GitRef>) -> &str {
    non_empty(git_ref.and_then(|r| r.git_ref.as_deref())).unwrap_or(UNKNOWN)
}

fn display_number(number: Option<u64>) -> String {
    number.map_or_else(|| UNKNOWN_NUMBER.to_owned(), |n| n.to_string())
}

fn short_id(commit: &Commit) -> String {
    commit
        .id
        .clone()
        .and_then(CommitSha::new)
        .map_or_else(|| UNKNOWN.to_owned(), |sha| sha.short().to_owned())
}

fn commit_subject(commit: &Commit) -> &str {
    let message = commit.message.as_deref().unwrap_or("");
    truncate_chars(first_line(message), COMMIT_SUBJECT_MAX_CHARS)
}

/// Git author name, falling back to the GitHub username.
fn commit_author(commit: &Commit) -> &str {
    commit
        .author
        .as_ref()
        .and_then(|a| non_empty(a.name.as_deref()).or_else(|| non_empty(a.username.as_deref())))
        .unwrap_or(UNKNOWN)
}

/// `<short-id> <subject>` for one commit.
fn commit_line(commit: &Commit) -> String {
    format!("{} {}", short_id(commit), commit_subject(commit))
        .trim_end()
        .to_owned()
}

/// The most recent commits, newest first, one per line.
fn commit_list(commits: &[Commit]) -> String {
    let mut lines: Vec<String> = commits
        .iter()
        .rev()
        .take(MAX_LISTED_COMMITS)
        .map(commit_line)
        .collect();
    if commits.len() > MAX_LISTED_COMMITS {
        lines.push(format!("… and {} more", commits.len() - MAX_LISTED_COMMITS));
    }
    lines.join("\n")
}
