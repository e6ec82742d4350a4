//! Behaviour of `translate` across the supported GitHub event types.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use translation::{
    translate, translate_at, EmbedColor, EmbedField, InboundEvent, OutboundMessage, Timestamp,
    TranslationResult,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at() -> Timestamp {
    Timestamp::from_utc(Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap())
}

fn run(event_type: &str, payload: Value) -> TranslationResult {
    translate_at(&InboundEvent::new(event_type, payload), at())
}

fn message(event_type: &str, payload: Value) -> OutboundMessage {
    match run(event_type, payload) {
        TranslationResult::Message(message) => message,
        TranslationResult::Suppressed => panic!("expected a message for `{event_type}`"),
    }
}

fn field<'a>(message: &'a OutboundMessage, name: &str) -> &'a str {
    message
        .fields
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.value.as_str())
        .unwrap_or_else(|| panic!("no `{name}` field in {:?}", message.fields))
}

fn field_names(message: &OutboundMessage) -> Vec<&str> {
    message.fields.iter().map(|f| f.name.as_str()).collect()
}

fn commit(id: &str, message: &str, author: &str) -> Value {
    json!({
        "id": id,
        "message": message,
        "url": format!("https://github.com/acme/widgets/commit/{id}"),
        "author": {"name": author, "username": author.to_lowercase()}
    })
}

// ── Never panics ──────────────────────────────────────────────────────────────

/// Every rule must cope with any subset of its payload being absent or
/// mistyped.
#[test]
fn sparse_and_mistyped_payloads_never_panic() {
    let payloads = [
        json!({}),
        Value::Null,
        json!([]),
        json!("text"),
        json!({"repository": null, "action": null}),
        json!({"repository": 5, "action": 5, "commits": {}, "ref": []}),
        json!({"action": "published", "release": null}),
        json!({"action": "published", "release": {"body": 12, "author": "x"}}),
        json!({"action": "opened", "issue": {"labels": [null, 3, {"name": null}]}}),
        json!({"action": "opened", "pull_request": {"head": "main", "user": []}}),
        json!({"ref": "refs/heads/main", "commits": [{}]}),
        json!({"ref": "refs/heads/main", "commits": [{"id": null, "author": null}]}),
    ];

    for event_type in ["ping", "push", "pull_request", "issues", "release", "star"] {
        for payload in &payloads {
            let _ = translate(&InboundEvent::new(event_type, payload.clone()));
        }
    }
}

// ── ping ──────────────────────────────────────────────────────────────────────

#[test]
fn ping_names_the_connected_repository() {
    let msg = message("ping", json!({"repository": {"full_name": "acme/widgets"}}));

    assert!(msg.title.contains("Connected"), "title was {:?}", msg.title);
    assert!(msg.description.contains("acme/widgets"));
    assert_eq!(msg.color, EmbedColor::INFORMATIONAL);
    assert_eq!(msg.url, None);
}

#[test]
fn ping_without_repository_still_produces_message() {
    let msg = message("ping", json!({"zen": "Keep it logically awesome."}));

    assert_eq!(msg.description, "Webhook successfully connected");
    assert_eq!(
        msg.fields,
        vec![EmbedField::block("Zen", "Keep it logically awesome.")]
    );
}

// ── push ──────────────────────────────────────────────────────────────────────

#[test]
fn push_with_no_commits_is_suppressed() {
    let result = run("push", json!({"ref": "refs/heads/dev", "commits": []}));
    assert_eq!(result, TranslationResult::Suppressed);
}

#[test]
fn push_with_missing_commit_list_is_suppressed() {
    let result = run("push", json!({"ref": "refs/tags/v1.0.0"}));
    assert!(result.is_suppressed());
}

#[test]
fn push_keeps_valid_commits_next_to_malformed_entries() {
    let msg = message(
        "push",
        json!({
            "ref": "refs/heads/main",
            "commits": [{"id": "abcdef0123", "message": "real"}, null, "junk"]
        }),
    );

    assert_eq!(msg.description, "1 commit(s) pushed to unknown");
    assert_eq!(field(&msg, "Latest Commit"), "abcdef0 real");
}

#[test]
fn push_single_commit_renders_latest_commit_author_and_branch() {
    let msg = message(
        "push",
        json!({
            "ref": "refs/heads/main",
            "compare": "https://github.com/acme/widgets/compare/abc...def",
            "repository": {"full_name": "acme/widgets"},
            "commits": [commit(
                "6dcb09b5b57875f334f61aebed695e2e4193db5e",
                "Fix widget alignment\n\nThe widgets were off by one.",
                "Mona Lisa"
            )]
        }),
    );

    assert_eq!(
        msg,
        OutboundMessage::new("📝 Push to main", EmbedColor::NEUTRAL, at())
            .with_description("1 commit(s) pushed to acme/widgets")
            .with_url(Some("https://github.com/acme/widgets/compare/abc...def"))
            .with_field(EmbedField::block(
                "Latest Commit",
                "[6dcb09b](https://github.com/acme/widgets/commit/6dcb09b5b57875f334f61aebed695e2e4193db5e) Fix widget alignment"
            ))
            .with_field(EmbedField::inline("Author", "Mona Lisa"))
            .with_field(EmbedField::inline("Branch", "main"))
    );
}

#[test]
fn push_branch_is_stripped_of_heads_prefix() {
    let msg = message(
        "push",
        json!({"ref": "refs/heads/main", "commits": [commit("aaaaaaaa", "m", "A")]}),
    );
    assert_eq!(field(&msg, "Branch"), "main");
}

#[test]
fn push_branch_without_prefix_is_kept_verbatim() {
    let msg = message(
        "push",
        json!({"ref": "main", "commits": [commit("aaaaaaaa", "m", "A")]}),
    );
    assert_eq!(field(&msg, "Branch"), "main");
    assert_eq!(msg.title, "📝 Push to main");
}

#[test]
fn push_latest_commit_is_last_in_list() {
    let msg = message(
        "push",
        json!({
            "ref": "refs/heads/main",
            "repository": {"full_name": "acme/widgets"},
            "commits": [
                commit("1111111aaaa", "First", "Ann"),
                commit("2222222bbbb", "Second", "Bob"),
                commit("3333333cccc", "Third", "Cyd"),
            ]
        }),
    );

    assert_eq!(msg.description, "3 commit(s) pushed to acme/widgets");
    assert_eq!(
        field_names(&msg),
        vec!["Latest Commit", "Author", "Branch", "Commits"]
    );
    assert!(field(&msg, "Latest Commit").contains("3333333"));
    assert_eq!(field(&msg, "Author"), "Cyd");
    assert_eq!(
        field(&msg, "Commits"),
        "3333333 Third\n2222222 Second\n1111111 First"
    );
}

#[test]
fn push_commit_subject_is_truncated_to_100_characters() {
    let long_subject = "a".repeat(120);
    let msg = message(
        "push",
        json!({"ref": "refs/heads/main", "commits": [commit("abcdef0123", &long_subject, "A")]}),
    );

    let latest = field(&msg, "Latest Commit");
    let subject = latest.rsplit(' ').next().unwrap();
    assert_eq!(subject.chars().count(), 100);
}

#[test]
fn push_short_id_is_exactly_seven_characters() {
    let msg = message(
        "push",
        json!({"ref": "refs/heads/main", "commits": [
            {"id": "0123456789abcdef0123456789abcdef01234567", "message": "x"},
            {"id": "fedcba9876543210fedcba9876543210fedcba98", "message": "y"},
        ]}),
    );

    for line in field(&msg, "Commits").lines() {
        let short = line.split(' ').next().unwrap();
        assert_eq!(short.chars().count(), 7, "line {line:?}");
    }
}

#[test]
fn push_commit_without_url_or_author_uses_defaults() {
    let msg = message(
        "push",
        json!({"commits": [{"id": "abcdef0123", "message": "Tidy"}]}),
    );

    assert_eq!(msg.title, "📝 Push to unknown");
    assert_eq!(msg.description, "1 commit(s) pushed to unknown");
    assert_eq!(msg.url, None);
    assert_eq!(field(&msg, "Latest Commit"), "abcdef0 Tidy");
    assert_eq!(field(&msg, "Author"), "unknown");
}

// ── pull_request ──────────────────────────────────────────────────────────────

fn pull_request(action: &str) -> Value {
    json!({
        "action": action,
        "number": 42,
        "pull_request": {
            "number": 42,
            "title": "Add widget caching",
            "html_url": "https://github.com/acme/widgets/pull/42",
            "user": {"login": "octocat"},
            "head": {"ref": "feature/cache"},
            "base": {"ref": "main"}
        },
        "repository": {"full_name": "acme/widgets"}
    })
}

#[test]
fn pull_request_opened_renders_full_embed() {
    let msg = message("pull_request", pull_request("opened"));

    assert_eq!(
        msg,
        OutboundMessage::new("🔀 Pull Request Opened", EmbedColor::GREEN, at())
            .with_description("#42: Add widget caching")
            .with_url(Some("https://github.com/acme/widgets/pull/42"))
            .with_field(EmbedField::inline("Author", "octocat"))
            .with_field(EmbedField::inline("Branch", "feature/cache → main"))
    );
}

#[test]
fn pull_request_merged_is_purple() {
    let msg = message("pull_request", pull_request("merged"));
    assert_eq!(msg.color, EmbedColor::PURPLE);
    assert_eq!(msg.color.as_u32(), 9_442_302);
}

#[test]
fn pull_request_unrecognized_action_is_neutral_but_still_sent() {
    let msg = message("pull_request", pull_request("synchronize"));
    assert_eq!(msg.color, EmbedColor::NEUTRAL);
    assert_eq!(msg.color.as_u32(), 7_506_394);
    assert_eq!(msg.title, "🔀 Pull Request Synchronize");
}

#[test]
fn pull_request_action_table() {
    for (action, color) in [
        ("opened", EmbedColor::GREEN),
        ("closed", EmbedColor::RED),
        ("reopened", EmbedColor::YELLOW),
        ("ready_for_review", EmbedColor::NEUTRAL),
    ] {
        assert_eq!(message("pull_request", pull_request(action)).color, color, "{action}");
    }
}

#[test]
fn pull_request_with_empty_payload_uses_defaults() {
    let msg = message("pull_request", json!({}));

    assert_eq!(msg.title, "🔀 Pull Request Unknown");
    assert_eq!(msg.description, "#?: Untitled");
    assert_eq!(msg.url, None);
    assert_eq!(field(&msg, "Author"), "unknown");
    assert_eq!(field(&msg, "Branch"), "unknown → unknown");
}

#[test]
fn pull_request_number_falls_back_to_top_level() {
    let msg = message(
        "pull_request",
        json!({"action": "closed", "number": 7, "pull_request": {"title": "T"}}),
    );
    assert_eq!(msg.description, "#7: T");
}

// ── issues ────────────────────────────────────────────────────────────────────

fn issue(action: &str, labels: Value) -> Value {
    json!({
        "action": action,
        "issue": {
            "number": 1347,
            "title": "Found a bug",
            "html_url": "https://github.com/acme/widgets/issues/1347",
            "user": {"login": "octocat"},
            "labels": labels
        }
    })
}

#[test]
fn issue_opened_renders_full_embed() {
    let msg = message("issues", issue("opened", json!([])));

    assert_eq!(
        msg,
        OutboundMessage::new("🐛 Issue Opened", EmbedColor::GREEN, at())
            .with_description("#1347: Found a bug")
            .with_url(Some("https://github.com/acme/widgets/issues/1347"))
            .with_field(EmbedField::inline("Author", "octocat"))
            .with_field(EmbedField::inline("Labels", "None"))
    );
}

#[test]
fn issue_labels_are_comma_joined() {
    let msg = message(
        "issues",
        issue("closed", json!([{"name": "bug"}, {"name": "urgent"}])),
    );
    assert_eq!(field(&msg, "Labels"), "bug, urgent");
    assert_eq!(msg.color, EmbedColor::RED);
}

#[test]
fn issue_labels_skip_malformed_entries() {
    let msg = message("issues", issue("opened", json!([{"name": "bug"}, 3])));
    assert_eq!(field(&msg, "Labels"), "bug");
}

#[test]
fn issue_without_labels_key_renders_none() {
    let msg = message("issues", json!({"action": "reopened", "issue": {"title": "x"}}));
    assert_eq!(field(&msg, "Labels"), "None");
    assert_eq!(msg.color, EmbedColor::YELLOW);
    assert_eq!(msg.title, "🐛 Issue Reopened");
}

#[test]
fn issue_actions_outside_the_announced_set_are_suppressed() {
    for action in ["edited", "labeled", "assigned", "deleted", ""] {
        assert!(
            run("issues", issue(action, json!([]))).is_suppressed(),
            "action {action:?} should be suppressed"
        );
    }
    assert!(run("issues", json!({})).is_suppressed());
}

// ── release ───────────────────────────────────────────────────────────────────

fn release(action: &str, body: &str) -> Value {
    json!({
        "action": action,
        "release": {
            "tag_name": "v2.1.0",
            "name": "Widgets 2.1",
            "body": body,
            "html_url": "https://github.com/acme/widgets/releases/tag/v2.1.0",
            "author": {"login": "release-bot"}
        }
    })
}

#[test]
fn release_published_renders_full_embed() {
    let msg = message("release", release("published", "Bug fixes."));

    assert_eq!(
        msg,
        OutboundMessage::new("🚀 New Release: v2.1.0", EmbedColor::GREEN, at())
            .with_description("**Widgets 2.1**\n\nBug fixes.")
            .with_url(Some("https://github.com/acme/widgets/releases/tag/v2.1.0"))
            .with_field(EmbedField::inline("Tag", "v2.1.0"))
            .with_field(EmbedField::inline("Author", "release-bot"))
    );
}

#[test]
fn release_other_actions_are_suppressed() {
    for action in ["created", "edited", "deleted", "prereleased", "released", "unpublished"] {
        assert!(
            run("release", release(action, "")).is_suppressed(),
            "action {action:?} should be suppressed"
        );
    }
    assert!(run("release", json!({})).is_suppressed());
}

#[test]
fn release_body_over_200_characters_is_truncated_with_ellipsis() {
    let body = "b".repeat(250);
    let msg = message("release", release("published", &body));

    let excerpt = msg.description.split("\n\n").nth(1).unwrap();
    assert_eq!(excerpt, format!("{}...", "b".repeat(200)));
    assert_eq!(excerpt.chars().count(), 203);
}

#[test]
fn release_body_of_exactly_200_characters_is_unchanged() {
    let body = "c".repeat(200);
    let msg = message("release", release("published", &body));

    let excerpt = msg.description.split("\n\n").nth(1).unwrap();
    assert_eq!(excerpt, body);
}

#[test]
fn release_whitespace_only_body_is_kept_verbatim() {
    let msg = message("release", release("published", "   "));
    assert_eq!(msg.description, "**Widgets 2.1**\n\n   ");
}

#[test]
fn release_without_body_or_name_uses_tag() {
    let msg = message(
        "release",
        json!({"action": "published", "release": {"tag_name": "v3.0.0", "name": null}}),
    );

    assert_eq!(msg.description, "**v3.0.0**");
    assert_eq!(field(&msg, "Tag"), "v3.0.0");
    assert_eq!(field(&msg, "Author"), "unknown");
}

// ── unrecognized events ───────────────────────────────────────────────────────

#[test]
fn unrecognized_event_produces_generic_notice() {
    let msg = message(
        "star",
        json!({"action": "created", "repository": {"full_name": "acme/widgets"}}),
    );

    assert_eq!(
        msg,
        OutboundMessage::new("🔔 GitHub Event: star", EmbedColor::NEUTRAL, at())
            .with_description("Event received from **acme/widgets**")
            .with_field(EmbedField::inline("Action", "created"))
    );
}

#[test]
fn unrecognized_event_without_repository() {
    let msg = message("workflow_run", json!({}));
    assert_eq!(msg.title, "🔔 GitHub Event: workflow_run");
    assert_eq!(msg.description, "Event received from **unknown**");
    assert!(msg.fields.is_empty());
}

// ── timestamps ────────────────────────────────────────────────────────────────

#[test]
fn translate_stamps_current_time() {
    let before = Utc::now();
    let result = translate(&InboundEvent::new("ping", json!({})));
    let after = Utc::now();

    let stamped = result.message().unwrap().timestamp.as_datetime();
    assert!(before <= stamped && stamped <= after);
}

#[test]
fn serialized_timestamp_ends_with_z() {
    let msg = message("ping", json!({}));
    let rendered = serde_json::to_value(&msg).unwrap();
    assert_eq!(rendered["timestamp"], json!("2026-10-19T09:00:00.000Z"));
}
