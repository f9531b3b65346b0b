//! Data Transfer Objects - request/response types for the posts API.
//!
//! Request bodies keep every field optional so a missing field can be reported
//! by name instead of as a generic deserialization failure. Handlers accept the
//! body as a [`JsonObject`] and convert it field by field, so a value of the
//! wrong type or format is reported by name too.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use blog_core::ValidationError;
use blog_core::domain::{Author, NewPost, Post, PostChanges};

/// A request body that parsed as a JSON object.
pub type JsonObject = Map<String, Value>;

/// Remove `key` from `object` and deserialize it. Absent and `null` are `None`.
fn take_field<T: DeserializeOwned>(
    object: &mut JsonObject,
    key: &str,
    field: &'static str,
) -> Result<Option<T>, ValidationError> {
    match object.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|_| ValidationError::invalid(field)),
    }
}

/// Author name as submitted by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorInput>,
    pub date: Option<DateTime<Utc>>,
}

impl TryFrom<JsonObject> for AuthorInput {
    type Error = ValidationError;

    fn try_from(mut body: JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: take_field(&mut body, "firstName", "author.firstName")?,
            last_name: take_field(&mut body, "lastName", "author.lastName")?,
        })
    }
}

impl TryFrom<JsonObject> for CreatePostRequest {
    type Error = ValidationError;

    fn try_from(mut body: JsonObject) -> Result<Self, Self::Error> {
        let title = take_field(&mut body, "title", "title")?;
        let content = take_field(&mut body, "content", "content")?;
        let author = take_field::<JsonObject>(&mut body, "author", "author")?
            .map(AuthorInput::try_from)
            .transpose()?;
        let date = take_field(&mut body, "date", "date")?;

        Ok(Self {
            title,
            content,
            author,
            date,
        })
    }
}

impl TryFrom<CreatePostRequest> for NewPost {
    type Error = ValidationError;

    fn try_from(req: CreatePostRequest) -> Result<Self, Self::Error> {
        let title = req.title.ok_or(ValidationError::missing("title"))?;
        let content = req.content.ok_or(ValidationError::missing("content"))?;
        let author = req.author.ok_or(ValidationError::missing("author"))?;
        let first_name = author
            .first_name
            .ok_or(ValidationError::missing("author.firstName"))?;
        let last_name = author
            .last_name
            .ok_or(ValidationError::missing("author.lastName"))?;

        let post = NewPost {
            title,
            author: Author::new(first_name, last_name),
            content,
            date: req.date,
        };
        post.validate()?;
        Ok(post)
    }
}

/// Body of `PUT /posts/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl TryFrom<JsonObject> for UpdatePostRequest {
    type Error = ValidationError;

    fn try_from(mut body: JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            id: take_field(&mut body, "id", "id")?,
            title: take_field(&mut body, "title", "title")?,
            content: take_field(&mut body, "content", "content")?,
        })
    }
}

impl UpdatePostRequest {
    pub fn into_changes(self) -> PostChanges {
        PostChanges {
            title: self.title,
            content: self.content,
        }
    }
}

/// A post as rendered on the wire. `author` is the flattened display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            author: post.author.display_name(),
            id: post.id,
            title: post.title,
            content: post.content,
            date: post.date,
        }
    }
}
