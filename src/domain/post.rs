use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::Document;

/// Role of a post author. Mirrors the three platform user roles.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthorType {
    Shelter,
    Volunteer,
    #[default]
    None,
}

/// A community feed post, ordered by `created_at` descending. Ties below
/// timestamp granularity fall back to backend document order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    /// Backend-assigned document id, injected after decoding.
    #[serde(skip_deserializing)]
    pub id: String,
    pub author_id: String,
    pub author_type: AuthorType,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Decodes a document snapshot, then injects the backend-assigned id.
    pub fn from_document(document: &Document) -> Result<Self, serde_json::Error> {
        let mut post: Post = serde_json::from_value(document.to_value())?;
        post.id = document.id.clone();
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_author_type_labels() {
        let fields = json!({
            "authorId": "s1",
            "authorType": "shelter",
            "content": "Open house this weekend",
        });
        let Some(fields) = fields.as_object() else {
            unreachable!()
        };
        let post = Post::from_document(&Document::new("post-1", fields.clone())).unwrap();
        assert_eq!(post.id, "post-1");
        assert_eq!(post.author_type, AuthorType::Shelter);
    }
}
