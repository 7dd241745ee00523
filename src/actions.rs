//! Stubbed remote operation surface.
//!
//! Every "server action" is a same-process async fn that sleeps for a
//! fixed simulated latency and then succeeds. Mutating operations require
//! the caller to pass the current session user and fail with
//! `Unauthorized` when there is none. There is no pagination, no retry
//! and no partial failure - the only other failure mode is the generic
//! `OperationFailed`.

use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::data;
use crate::models::{
    AddBookParams, BlogComment, BookSummary, ChatMessage, NewBlogPost, NewDiscussion,
};
use crate::services::session::SessionUser;

const SEARCH_DELAY_MS: u32 = 1000;
const MUTATION_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("operation failed: {0}")]
    OperationFailed(String),
}

fn require_user(user: Option<&SessionUser>) -> Result<&SessionUser, ActionError> {
    user.ok_or(ActionError::Unauthorized)
}

async fn simulate_latency(ms: u32) {
    TimeoutFuture::new(ms).await;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAction {
    Add,
    Remove,
}

/// Search the catalog. Would call an external books API in a real app;
/// here it substring-matches the mock catalog.
pub async fn search_books(query: &str) -> Result<Vec<BookSummary>, ActionError> {
    simulate_latency(SEARCH_DELAY_MS).await;

    let needle = query.to_lowercase();
    Ok(data::search_catalog()
        .into_iter()
        .filter(|book| {
            needle.is_empty()
                || book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        })
        .collect())
}

pub async fn add_book_to_library(
    user: Option<&SessionUser>,
    _book: AddBookParams,
) -> Result<(), ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok(())
}

pub async fn update_book_tags(
    user: Option<&SessionUser>,
    _book_id: &str,
    _tag: &str,
    _action: TagAction,
) -> Result<(), ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok(())
}

pub async fn remove_book_from_library(
    user: Option<&SessionUser>,
    _book_id: &str,
) -> Result<(), ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok(())
}

pub async fn create_custom_category(
    user: Option<&SessionUser>,
    _name: &str,
) -> Result<(), ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok(())
}

pub async fn send_message(
    user: Option<&SessionUser>,
    _discussion_id: &str,
    _content: &str,
) -> Result<(), ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok(())
}

/// Fetch the full message list for a discussion. The poll loop calls this
/// every tick and replaces its list wholesale with the result.
pub async fn get_messages(
    user: Option<&SessionUser>,
    discussion_id: &str,
) -> Result<Vec<ChatMessage>, ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok(data::messages_for(discussion_id))
}

pub async fn join_discussion(
    user: Option<&SessionUser>,
    _discussion_id: &str,
) -> Result<(), ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok(())
}

pub async fn leave_discussion(
    user: Option<&SessionUser>,
    _discussion_id: &str,
) -> Result<(), ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok(())
}

/// Create a discussion group; returns the new discussion id.
pub async fn create_discussion(
    user: Option<&SessionUser>,
    _data: NewDiscussion,
) -> Result<String, ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok("new-discussion-id".to_string())
}

/// Create a blog post; returns the new post slug.
pub async fn create_blog_post(
    user: Option<&SessionUser>,
    _data: NewBlogPost,
) -> Result<String, ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok("new-blog-post-slug".to_string())
}

pub async fn add_comment(
    user: Option<&SessionUser>,
    _post_id: &str,
    _content: &str,
) -> Result<(), ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok(())
}

pub async fn like_blog_post(
    user: Option<&SessionUser>,
    _post_id: &str,
) -> Result<(), ActionError> {
    require_user(user)?;
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok(())
}

pub async fn get_blog_comments(post_id: &str) -> Result<Vec<BlogComment>, ActionError> {
    simulate_latency(MUTATION_DELAY_MS).await;
    Ok(data::blog_comments(post_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_without_session() {
        // The auth check precedes the simulated latency, so the rejection
        // is observable without driving the wasm timer.
        assert_eq!(require_user(None).unwrap_err(), ActionError::Unauthorized);
    }

    #[test]
    fn test_unauthorized_display() {
        assert_eq!(ActionError::Unauthorized.to_string(), "Unauthorized");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn demo_user() -> SessionUser {
        SessionUser {
            id: "mock-user".into(),
            name: "Test User".into(),
            email: "test@example.com".into(),
            image: String::new(),
        }
    }

    #[wasm_bindgen_test]
    async fn test_search_matches_title_substring() {
        let results = search_books("midnight").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "The Midnight Library");
    }

    #[wasm_bindgen_test]
    async fn test_mutations_succeed_with_session() {
        let user = demo_user();
        update_book_tags(Some(&user), "1", "reading", TagAction::Add)
            .await
            .unwrap();
        remove_book_from_library(Some(&user), "1").await.unwrap();
    }

    #[wasm_bindgen_test]
    async fn test_get_messages_requires_session() {
        let err = get_messages(None, "1").await.unwrap_err();
        assert_eq!(err, ActionError::Unauthorized);
    }

    #[wasm_bindgen_test]
    async fn test_discussion_membership_roundtrip() {
        let user = demo_user();
        join_discussion(Some(&user), "1").await.unwrap();
        leave_discussion(Some(&user), "1").await.unwrap();
    }
}
