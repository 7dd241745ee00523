//! Chat feed aggregation.
//!
//! The discussion chat renders a flat fetched message list as
//! date-grouped bubbles. Grouping and sender-collapse both work off the
//! fetched sequence as-is - messages are never re-sorted by timestamp, so
//! group order is first-seen order and within-group order is the input
//! subsequence order.

use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

use crate::models::{ChatMessage, ChatUser};
use crate::services::session::SessionUser;

/// Messages sharing one calendar-date header.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    pub label: String,
    pub messages: Vec<ChatMessage>,
}

/// Header label for a message's calendar date, in the viewer's zone.
pub fn date_label(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%B %-d, %Y").to_string()
}

/// Short time label shown next to a bubble.
pub fn time_label(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

/// Group messages by calendar-date label, preserving fetch order.
pub fn group_by_date(messages: &[ChatMessage]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    for message in messages {
        let label = date_label(&message.created_at);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.messages.push(message.clone()),
            None => groups.push(DateGroup {
                label,
                messages: vec![message.clone()],
            }),
        }
    }
    groups
}

/// Whether the message at `index` within a date group shows its sender's
/// avatar and name. Consecutive messages from the same sender collapse;
/// the index is group-local, not feed-global.
pub fn shows_sender(messages: &[ChatMessage], index: usize) -> bool {
    index == 0 || messages[index - 1].user.id != messages[index].user.id
}

/// Whether a message renders right-aligned as the viewer's own. The
/// viewer identity is an explicit parameter, never ambient state.
pub fn is_outgoing(message: &ChatMessage, current_user_id: &str) -> bool {
    message.user.id == current_user_id
}

/// Synthesize the optimistic local copy of an outgoing message.
///
/// Returns `None` for empty or whitespace-only content - such a send is a
/// no-op. The local copy carries a client-generated id and the client
/// clock; nothing links it to the id the server would assign, so the next
/// full refetch simply replaces it.
pub fn draft_local_message(content: &str, user: &SessionUser) -> Option<ChatMessage> {
    if content.trim().is_empty() {
        return None;
    }
    Some(ChatMessage {
        id: Uuid::new_v4().to_string(),
        content: content.to_string(),
        created_at: Utc::now(),
        user: ChatUser {
            id: user.id.clone(),
            name: user.name.clone(),
            image: user.image.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user(id: &str) -> ChatUser {
        ChatUser {
            id: id.to_string(),
            name: format!("User {id}"),
            image: String::new(),
        }
    }

    fn msg(id: &str, day: u32, user_id: &str) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            content: format!("message {id}"),
            created_at: Utc.with_ymd_and_hms(2023, 6, day, 12, 0, 0).unwrap(),
            user: user(user_id),
        }
    }

    #[test]
    fn test_groups_preserve_first_seen_order() {
        // Day 16 appears before day 15 in fetch order; grouping must not
        // re-sort.
        let messages = vec![
            msg("a", 16, "u1"),
            msg("b", 15, "u2"),
            msg("c", 16, "u1"),
        ];
        let groups = group_by_date(&messages);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, date_label(&messages[0].created_at));
        assert_eq!(
            groups[0]
                .messages
                .iter()
                .map(|m| m.id.as_str())
                .collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        assert_eq!(groups[1].messages[0].id, "b");
    }

    #[test]
    fn test_sender_collapse_sequence() {
        // [d1u1, d1u1, d1u2, d2u1] -> avatars [true, false, true, true]
        let messages = vec![
            msg("a", 15, "u1"),
            msg("b", 15, "u1"),
            msg("c", 15, "u2"),
            msg("d", 16, "u1"),
        ];
        let groups = group_by_date(&messages);

        let mut shown = Vec::new();
        for group in &groups {
            for index in 0..group.messages.len() {
                shown.push(shows_sender(&group.messages, index));
            }
        }
        assert_eq!(shown, vec![true, false, true, true]);
    }

    #[test]
    fn test_collapse_uses_group_local_index() {
        // The same sender opening a new date group shows the avatar again
        // even though the previous global message was theirs.
        let messages = vec![msg("a", 15, "u1"), msg("b", 16, "u1")];
        let groups = group_by_date(&messages);
        assert_eq!(groups.len(), 2);
        assert!(shows_sender(&groups[1].messages, 0));
    }

    #[test]
    fn test_alignment_by_explicit_user_id() {
        let mine = msg("a", 15, "mock-user");
        let theirs = msg("b", 15, "user1");
        assert!(is_outgoing(&mine, "mock-user"));
        assert!(!is_outgoing(&theirs, "mock-user"));
    }

    #[test]
    fn test_whitespace_draft_is_rejected() {
        let user = SessionUser {
            id: "mock-user".into(),
            name: "Test User".into(),
            email: "test@example.com".into(),
            image: String::new(),
        };
        assert!(draft_local_message("", &user).is_none());
        assert!(draft_local_message("   \n\t", &user).is_none());

        let draft = draft_local_message("hello", &user).unwrap();
        assert_eq!(draft.content, "hello");
        assert_eq!(draft.user.id, "mock-user");
        assert!(!draft.id.is_empty());
    }

    #[test]
    fn test_empty_feed_groups_to_nothing() {
        assert!(group_by_date(&[]).is_empty());
    }
}
