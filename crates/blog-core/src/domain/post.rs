use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Structured author name as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Flattened display form, `"{first} {last}"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("author.firstName", &self.first_name)?;
        require("author.lastName", &self.last_name)
    }
}

/// Post entity - a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: Author,
    pub content: String,
    pub date: DateTime<Utc>,
}

/// A post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub author: Author,
    pub content: String,
    pub date: Option<DateTime<Utc>>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, author: Author, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author,
            content: content.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Check that every required field is present and non-blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("content", &self.content)?;
        self.author.validate()
    }

    /// Assign an id and default the date to now.
    ///
    /// The date is truncated to microseconds, the precision a PostgreSQL
    /// `timestamptz` keeps, so the returned post equals what gets stored.
    /// Callers are expected to have validated the input first.
    pub fn into_post(self) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: self.title,
            author: self.author,
            content: self.content,
            date: self.date.unwrap_or_else(Utc::now).trunc_subsecs(6),
        }
    }
}

/// Partial update. Only title and content are mutable after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Supplied fields must be non-blank; absent ones are left alone.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            require("title", title)?;
        }
        if let Some(content) = &self.content {
            require("content", content)?;
        }
        Ok(())
    }

    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(())
}
