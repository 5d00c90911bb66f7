use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a published article.
///
/// The seed data carries numeric ids while navigation hands them around as
/// text, so lookups compare the canonical string form: `2` and `"2"` address
/// the same record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(u64),
    Text(String),
}

impl ArticleId {
    pub fn canonical(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl PartialEq for ArticleId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(n), Self::Text(s)) | (Self::Text(s), Self::Number(n)) => {
                s == &n.to_string()
            }
        }
    }
}

impl Eq for ArticleId {}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for ArticleId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(s.to_string()),
        })
    }
}

impl From<u64> for ArticleId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ArticleId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One published news item. The collection it lives in is read-only after
/// startup; `date` and `read_time` are display strings, not parsed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub summary: String,
    /// Long-form HTML-bearing body. Rendering falls back to `summary` when
    /// absent; this layer never executes or sanitizes it.
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub date: String,
    pub category: Option<String>,
    pub link: String,
    pub author: Option<String>,
    pub read_time: Option<String>,
}

impl Article {
    /// Body text for the detail view, with the summary standing in when
    /// there is no long-form content.
    pub fn body(&self) -> &str {
        self.content.as_deref().unwrap_or(&self.summary)
    }
}
