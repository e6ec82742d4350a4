//! Event classification.
//!
//! Maps GitHub's event type tag (the `X-GitHub-Event` header) onto the closed
//! set of event kinds Hookcord has a dedicated rule for. Every other tag lands
//! in [`EventKind::Other`] and is handled by the generic fallback rule;
//! classification never fails.

/// The translation rule an event is routed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Webhook connectivity check.
    Ping,
    Push,
    PullRequest,
    Issues,
    Release,
    /// Any tag without a dedicated rule. Holds the tag as received.
    Other(String),
}

impl EventKind {
    /// Returns the GitHub event type tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ping => "ping",
            Self::Push => "push",
            Self::PullRequest => "pull_request",
            Self::Issues => "issues",
            Self::Release => "release",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Returns `true` if this kind has a dedicated translation rule.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routes an event type tag to its translation rule.
///
/// Tags are matched exactly; GitHub always sends them in lowercase.
pub fn classify(type_tag: &str) -> EventKind {
    match type_tag {
        "ping" => EventKind::Ping,
        "push" => EventKind::Push,
        "pull_request" => EventKind::PullRequest,
        "issues" => EventKind::Issues,
        "release" => EventKind::Release,
        other => EventKind::Other(other.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_map_to_dedicated_kinds() {
        assert_eq!(classify("ping"), EventKind::Ping);
        assert_eq!(classify("push"), EventKind::Push);
        assert_eq!(classify("pull_request"), EventKind::PullRequest);
        assert_eq!(classify("issues"), EventKind::Issues);
        assert_eq!(classify("release"), EventKind::Release);
    }

    #[test]
    fn unknown_tags_fall_back_to_other() {
        let kind = classify("star");
        assert_eq!(kind, EventKind::Other("star".to_owned()));
        assert!(!kind.is_supported());
        assert_eq!(kind.as_str(), "star");
    }

    #[test]
    fn near_misses_are_not_supported() {
        // `issue_comment` and `pull_request_review` are distinct GitHub events.
        assert!(!classify("issue_comment").is_supported());
        assert!(!classify("pull_request_review").is_supported());
        assert!(!classify("Push").is_supported());
    }

    #[test]
    fn kind_round_trips_through_its_tag() {
        for tag in ["ping", "push", "pull_request", "issues", "release"] {
            assert_eq!(classify(tag).to_string(), tag);
        }
    }
}
