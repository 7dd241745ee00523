//! Shared data types for the BookNook app.
//!
//! Wire-shaped types keep the camelCase field names the JSON payloads use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Books & Library
// ============================================================================

/// A book in a user's library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_url: String,
    pub genre: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_category: Option<String>,
}

impl Book {
    /// Add a tag. Tags behave as a set: adding an existing tag is a no-op.
    pub fn add_tag(&mut self, tag: &str) {
        if !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }

    /// Remove a tag by value.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A book outside any library: search results, featured and recommended sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_url: String,
    pub genre: String,
}

/// Payload for adding a book to the current user's library.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookParams {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub cover_url: String,
    pub genre: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_category: Option<String>,
}

// ============================================================================
// Discussions & Chat
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatUser {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// A single chat message. Immutable once fetched; the optimistic local copy
/// carries a client-generated id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user: ChatUser,
}

/// Discussion group card data for the list page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionGroup {
    pub id: String,
    pub title: String,
    pub description: String,
    pub book: String,
    pub is_private: bool,
    pub member_count: u32,
    pub message_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub image: String,
    pub is_creator: bool,
}

/// Full discussion detail, including the book blurb and member roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub book: String,
    pub book_author: String,
    pub book_cover: String,
    pub book_description: String,
    pub is_private: bool,
    pub is_creator: bool,
    pub created_at: String,
    pub creator: Member,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiscussion {
    pub title: String,
    pub description: String,
    pub book: String,
    pub is_private: bool,
}

// ============================================================================
// Blog
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub cover_image: String,
    pub published_at: String,
    pub categories: Vec<String>,
    pub comment_count: u32,
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_url: String,
}

/// A full post as rendered on the detail page. `content` is Markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDetail {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: String,
    pub published_at: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub likes: u32,
    pub author: Author,
    pub related_books: Vec<RelatedBook>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogComment {
    pub id: String,
    pub content: String,
    pub created_at: String,
    pub user: ChatUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub visibility: String,
}

// ============================================================================
// Profile & Challenges
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingStats {
    pub total_books: u32,
    pub currently_reading: u32,
    pub completed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Added,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub member_since: String,
    pub reading_goal: u32,
    pub favorite_genre: String,
    pub stats: ReadingStats,
    pub recent_activity: Vec<RecentActivity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    Personal,
    Group,
}

/// A reading challenge card. `progress`/`total` count books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingChallenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub progress: u32,
    pub total: u32,
    pub kind: ChallengeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<u32>,
    pub deadline: String,
    #[serde(default)]
    pub completed: bool,
}

/// A challenge open for joining (not yet started by the user).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenChallenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub participants: u32,
    pub deadline: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_wire_shape() {
        let json = json!({
            "id": "6",
            "title": "Where the Crawdads Sing",
            "author": "Delia Owens",
            "coverUrl": "/placeholder.svg?height=300&width=200",
            "genre": "Fiction",
            "tags": ["purchased", "reading"],
            "customCategory": "Book Club"
        });
        let book: Book = serde_json::from_value(json).unwrap();
        assert_eq!(book.cover_url, "/placeholder.svg?height=300&width=200");
        assert_eq!(book.custom_category.as_deref(), Some("Book Club"));

        let back = serde_json::to_value(&book).unwrap();
        assert_eq!(back["coverUrl"], "/placeholder.svg?height=300&width=200");
        assert_eq!(back["customCategory"], "Book Club");
    }

    #[test]
    fn test_book_without_category_omits_field() {
        let book = Book {
            id: "1".into(),
            title: "The Midnight Library".into(),
            author: "Matt Haig".into(),
            cover_url: String::new(),
            genre: "Fiction".into(),
            tags: vec![],
            custom_category: None,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("customCategory").is_none());
    }

    #[test]
    fn test_tags_behave_as_set() {
        let mut book = Book {
            id: "1".into(),
            title: "t".into(),
            author: "a".into(),
            cover_url: String::new(),
            genre: "Fiction".into(),
            tags: vec!["reading".into()],
            custom_category: None,
        };
        book.add_tag("reading");
        assert_eq!(book.tags, vec!["reading"]);

        book.add_tag("purchased");
        assert_eq!(book.tags.len(), 2);

        book.remove_tag("reading");
        assert!(!book.has_tag("reading"));
        assert!(book.has_tag("purchased"));
    }

    #[test]
    fn test_chat_message_deserialization() {
        let json = json!({
            "id": "msg1",
            "content": "What did everyone think about the Astrophage?",
            "createdAt": "2023-06-15T14:30:00Z",
            "user": {
                "id": "user1",
                "name": "Jane Smith",
                "image": "/placeholder.svg?height=50&width=50"
            }
        });
        let msg: ChatMessage = serde_json::from_value(json).unwrap();
        assert_eq!(msg.user.id, "user1");
        assert_eq!(msg.created_at.to_rfc3339(), "2023-06-15T14:30:00+00:00");
    }

    #[test]
    fn test_activity_kind_rename() {
        let json = json!({
            "type": "added",
            "message": "Added 'The Midnight Library' to your library",
            "date": "2 days ago"
        });
        let activity: RecentActivity = serde_json::from_value(json).unwrap();
        assert_eq!(activity.kind, ActivityKind::Added);
    }
}
