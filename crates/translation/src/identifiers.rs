//! Newtype domain identifiers.
//!
//! Every GitHub concept that has an identity and shows up in a rendered embed
//! is represented as a distinct newtype wrapping a `String`. This keeps a
//! branch name from being passed where a commit id is expected, and gives each
//! identifier a home for its display rules (e.g. [`CommitSha::short`]).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Git identifiers
// ---------------------------------------------------------------------------

string_id! {
    /// A git branch name without any `refs/heads/` prefix (e.g. `"main"`).
    BranchName
}

string_id! {
    /// Full git commit SHA as sent by GitHub.
    CommitSha
}

/// Prefix GitHub puts in front of branch names in push `ref` values.
const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Number of characters shown for a commit id in compact displays.
pub const SHORT_SHA_LEN: usize = 7;

impl BranchName {
    /// Derives a branch name from a push `ref`.
    ///
    /// `refs/heads/main` becomes `main`. A ref without the prefix (including
    /// `refs/tags/...`) is kept verbatim. Returns `None` for an empty ref or a
    /// bare prefix.
    pub fn from_ref(git_ref: &str) -> Option<Self> {
        Self::new(git_ref.strip_prefix(BRANCH_REF_PREFIX).unwrap_or(git_ref))
    }
}

impl CommitSha {
    /// Returns the first [`SHORT_SHA_LEN`] characters of the commit id, or the
    /// whole id when it is shorter.
    pub fn short(&self) -> &str {
        crate::text::truncate_chars(&self.0, SHORT_SHA_LEN)
    }
}
