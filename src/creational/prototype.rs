//! Copying a fully built value instead of constructing from scratch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A news article. Cloning yields an independent copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub title: String,
    pub content: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
}

impl News {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            published_at: Utc::now(),
        }
    }

    /// Copy of this article with a different title; `self` is left untouched.
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for News {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "News(title={}, content={}, author={})",
            self.title, self.content, self.author
        )
    }
}
