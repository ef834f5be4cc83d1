//! Types shared across resource areas.

use serde::{Deserialize, Serialize};

/// Pagination accessors for offset-based page schemes.
pub trait Paginated {
    /// The index of the first item on this page.
    fn start_at(&self) -> i64;
    /// Total matching items, as reported by Jira.
    fn total(&self) -> i64;
    /// Items on this page.
    fn page_len(&self) -> usize;

    /// Check if there are more pages of results.
    fn has_more(&self) -> bool {
        self.next_start() < self.total()
    }

    /// Get the starting index for the next page.
    fn next_start(&self) -> i64 {
        self.start_at() + self.page_len() as i64
    }
}

/// Implements [`Paginated`] for a scheme with `start_at`, `total` and a list field.
macro_rules! paginated {
    ($scheme:ty, $items:ident) => {
        impl $crate::models::Paginated for $scheme {
            fn start_at(&self) -> i64 {
                self.start_at
            }

            fn total(&self) -> i64 {
                self.total
            }

            fn page_len(&self) -> usize {
                self.$items.len()
            }
        }
    };
}
pub(crate) use paginated;

/// A long-running task handle, returned by asynchronous operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskScheme {
    pub id: String,
    #[serde(rename = "self")]
    pub self_url: String,
}

/// Avatar URLs for users and projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarUrls {
    /// 48x48 pixel avatar.
    #[serde(rename = "48x48", default)]
    pub size_48: Option<String>,
    /// 24x24 pixel avatar.
    #[serde(rename = "24x24", default)]
    pub size_24: Option<String>,
    /// 16x16 pixel avatar.
    #[serde(rename = "16x16", default)]
    pub size_16: Option<String>,
    /// 32x32 pixel avatar.
    #[serde(rename = "32x32", default)]
    pub size_32: Option<String>,
}

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}
