//! # Blog Shared
//!
//! Wire types for the posts API: request bodies, the post response shape and
//! problem-details errors. Domain posts only become wire posts through
//! [`dto::PostResponse`].

pub mod dto;
pub mod response;

pub use dto::{AuthorInput, CreatePostRequest, JsonObject, PostResponse, UpdatePostRequest};
pub use response::ErrorResponse;
