//! In-memory mock dataset.
//!
//! Stands in for the database and the external book API: every accessor
//! builds its result on the fly. Message timestamps are synthesized
//! relative to the current time so the chat feed always spans two
//! calendar dates.

use chrono::{Duration, Utc};

use crate::models::{
    Author, BlogComment, BlogPost, BlogPostDetail, Book, BookSummary, ChatMessage, ChatUser,
    Discussion, DiscussionGroup, Member, OpenChallenge, ReadingChallenge, ReadingStats,
    RecentActivity, RelatedBook, UserProfile,
};
use crate::models::{ActivityKind, ChallengeKind};

const COVER: &str = "/placeholder.svg?height=300&width=200";
const AVATAR: &str = "/placeholder.svg?height=50&width=50";
const BANNER: &str = "/placeholder.svg?height=400&width=800";

fn book(id: &str, title: &str, author: &str, genre: &str) -> BookSummary {
    BookSummary {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        cover_url: COVER.to_string(),
        genre: genre.to_string(),
    }
}

fn chat_user(id: &str, name: &str) -> ChatUser {
    ChatUser {
        id: id.to_string(),
        name: name.to_string(),
        image: AVATAR.to_string(),
    }
}

fn member(id: &str, name: &str, is_creator: bool) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
        image: AVATAR.to_string(),
        is_creator,
    }
}

/// The catalog the stub search runs against.
pub fn search_catalog() -> Vec<BookSummary> {
    vec![
        book("1", "The Midnight Library", "Matt Haig", "Fiction"),
        book("2", "Atomic Habits", "James Clear", "Self-Help"),
        book("3", "Project Hail Mary", "Andy Weir", "Science Fiction"),
        book(
            "4",
            "The Invisible Life of Addie LaRue",
            "V.E. Schwab",
            "Fantasy",
        ),
        book("5", "Educated", "Tara Westover", "Memoir"),
        book("6", "Where the Crawdads Sing", "Delia Owens", "Fiction"),
    ]
}

/// Books highlighted on the landing page.
pub fn featured_books() -> Vec<BookSummary> {
    search_catalog().into_iter().take(4).collect()
}

/// The current user's library: six books, one with a custom category.
pub fn user_library(_user_id: &str) -> Vec<Book> {
    let full = |summary: BookSummary, tags: &[&str], category: Option<&str>| Book {
        id: summary.id,
        title: summary.title,
        author: summary.author,
        cover_url: summary.cover_url,
        genre: summary.genre,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        custom_category: category.map(String::from),
    };

    vec![
        full(
            book("1", "The Midnight Library", "Matt Haig", "Fiction"),
            &["purchased", "reading"],
            None,
        ),
        full(
            book("2", "Atomic Habits", "James Clear", "Self-Help"),
            &["purchased", "completed"],
            None,
        ),
        full(
            book("3", "Project Hail Mary", "Andy Weir", "Science Fiction"),
            &["non-purchased", "wishlist"],
            None,
        ),
        full(
            book(
                "4",
                "The Invisible Life of Addie LaRue",
                "V.E. Schwab",
                "Fantasy",
            ),
            &["purchased", "botm"],
            None,
        ),
        full(
            book("5", "Educated", "Tara Westover", "Non-Fiction"),
            &["purchased", "completed"],
            None,
        ),
        full(
            book("6", "Where the Crawdads Sing", "Delia Owens", "Fiction"),
            &["purchased", "reading"],
            Some("Book Club"),
        ),
    ]
}

pub fn recommended_books(_user_id: &str) -> Vec<BookSummary> {
    vec![
        book("7", "Klara and the Sun", "Kazuo Ishiguro", "Science Fiction"),
        book("8", "The Four Winds", "Kristin Hannah", "Historical Fiction"),
        book("9", "The Vanishing Half", "Brit Bennett", "Fiction"),
        book("10", "The Psychology of Money", "Morgan Housel", "Finance"),
    ]
}

pub fn discussion_groups() -> Vec<DiscussionGroup> {
    let group = |id: &str,
                 title: &str,
                 description: &str,
                 book: &str,
                 is_private: bool,
                 members: u32,
                 messages: u32| DiscussionGroup {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        book: book.to_string(),
        is_private,
        member_count: members,
        message_count: messages,
    };

    vec![
        group(
            "1",
            "Project Hail Mary - Science & Ethics",
            "Let's discuss the scientific concepts and ethical dilemmas in Andy Weir's latest novel.",
            "Project Hail Mary",
            false,
            24,
            156,
        ),
        group(
            "2",
            "Atomic Habits Reading Group",
            "A supportive community to discuss implementing the habits and strategies from James Clear's book.",
            "Atomic Habits",
            false,
            42,
            287,
        ),
        group(
            "3",
            "The Midnight Library - Book Club",
            "Exploring the themes of regret, possibility, and the meaning of life in Matt Haig's novel.",
            "The Midnight Library",
            false,
            18,
            93,
        ),
        group(
            "4",
            "Addie LaRue - Character Analysis",
            "Deep dive into the characters and their development throughout V.E. Schwab's novel.",
            "The Invisible Life of Addie LaRue",
            true,
            12,
            67,
        ),
        group(
            "5",
            "Fantasy Book Lovers",
            "A general discussion group for fans of fantasy literature.",
            "Various Fantasy Books",
            false,
            56,
            412,
        ),
        group(
            "6",
            "Science Fiction Enthusiasts",
            "Discussing classic and contemporary sci-fi novels and their impact on society.",
            "Various Sci-Fi Books",
            false,
            38,
            245,
        ),
    ]
}

pub fn discussion_by_id(id: &str) -> Option<Discussion> {
    match id {
        "1" => Some(Discussion {
            id: "1".into(),
            title: "Project Hail Mary - Science & Ethics".into(),
            description:
                "Let's discuss the scientific concepts and ethical dilemmas in Andy Weir's latest novel."
                    .into(),
            book: "Project Hail Mary".into(),
            book_author: "Andy Weir".into(),
            book_cover: COVER.into(),
            book_description:
                "Ryland Grace is the sole survivor on a desperate, last-chance mission - and if he fails, humanity and the Earth itself will perish."
                    .into(),
            is_private: false,
            is_creator: false,
            created_at: "2023-06-15".into(),
            creator: member("user1", "Jane Smith", true),
            members: vec![
                member("user1", "Jane Smith", true),
                member("user2", "John Doe", false),
                member("user3", "Alice Johnson", false),
                member("user4", "Bob Williams", false),
                member("user5", "Carol Brown", false),
            ],
        }),
        "2" => Some(Discussion {
            id: "2".into(),
            title: "Atomic Habits Reading Group".into(),
            description:
                "A supportive community to discuss implementing the habits and strategies from James Clear's book."
                    .into(),
            book: "Atomic Habits".into(),
            book_author: "James Clear".into(),
            book_cover: COVER.into(),
            book_description:
                "No matter your goals, Atomic Habits offers a proven framework for improving - every day."
                    .into(),
            is_private: false,
            is_creator: true,
            created_at: "2023-05-22".into(),
            creator: member("user2", "John Doe", true),
            members: vec![
                member("user2", "John Doe", true),
                member("user1", "Jane Smith", false),
                member("user3", "Alice Johnson", false),
            ],
        }),
        _ => None,
    }
}

/// Mock chat history for a discussion. Yesterday's messages come first so
/// the feed always groups under two date headers.
pub fn messages_for(discussion_id: &str) -> Vec<ChatMessage> {
    let now = Utc::now();
    let yesterday = now - Duration::days(1);

    let msg = |id: &str, content: &str, at: chrono::DateTime<Utc>, user: ChatUser| ChatMessage {
        id: id.to_string(),
        content: content.to_string(),
        created_at: at,
        user,
    };

    match discussion_id {
        "1" => vec![
            msg(
                "msg1",
                "I just finished reading Project Hail Mary and I'm blown away by the scientific concepts. What did everyone think about the Astrophage?",
                yesterday,
                chat_user("user1", "Jane Smith"),
            ),
            msg(
                "msg2",
                "The Astrophage concept was fascinating! I loved how Weir made it scientifically plausible while still being creative.",
                yesterday,
                chat_user("user3", "Alice Johnson"),
            ),
            msg(
                "msg3",
                "What really got me was the relationship between Grace and Rocky. Such an unlikely friendship!",
                yesterday,
                chat_user("user4", "Bob Williams"),
            ),
            msg(
                "msg4",
                "The way they overcame communication barriers was brilliant storytelling.",
                now,
                chat_user("user2", "John Doe"),
            ),
            msg(
                "msg5",
                "I'm curious about the ethical implications of Grace's mission. Was it right to send him without his knowledge?",
                now,
                chat_user("user5", "Carol Brown"),
            ),
            msg(
                "msg6",
                "That's a great point. I think the book raises interesting questions about consent vs. the greater good.",
                now,
                chat_user("user1", "Jane Smith"),
            ),
        ],
        "2" => vec![
            msg(
                "msg1",
                "I've been trying to implement the 2-minute rule from Atomic Habits. Has anyone else had success with this?",
                yesterday,
                chat_user("user2", "John Doe"),
            ),
            msg(
                "msg2",
                "Yes! The 2-minute rule has been a game-changer for me. I've been able to start so many good habits by making them super small.",
                yesterday,
                chat_user("user3", "Alice Johnson"),
            ),
            msg(
                "msg3",
                "I'm struggling with habit stacking. Any tips on how to effectively link habits together?",
                now,
                chat_user("user1", "Jane Smith"),
            ),
            msg(
                "msg4",
                "I found it helpful to use existing habits as triggers. For example, after I brush my teeth (existing habit), I meditate for 2 minutes (new habit).",
                now,
                chat_user("user2", "John Doe"),
            ),
        ],
        _ => Vec::new(),
    }
}

pub fn blog_posts() -> Vec<BlogPost> {
    let post = |id: &str,
                slug: &str,
                title: &str,
                excerpt: &str,
                published: &str,
                categories: &[&str],
                comments: u32,
                author: &str| BlogPost {
        id: id.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        cover_image: BANNER.to_string(),
        published_at: published.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        comment_count: comments,
        author: Author {
            name: author.to_string(),
            image: AVATAR.to_string(),
        },
    };

    vec![
        post(
            "blog1",
            "why-project-hail-mary-is-a-must-read",
            "Why Project Hail Mary is a Must-Read for Science Fiction Fans",
            "Andy Weir's latest novel combines hard science with heart in a way that makes it impossible to put down.",
            "March 10, 2023",
            &["Book Reviews", "Science Fiction"],
            24,
            "Jane Smith",
        ),
        post(
            "blog2",
            "how-atomic-habits-changed-my-reading-routine",
            "How Atomic Habits Changed My Reading Routine",
            "Applying James Clear's principles to establish a consistent reading habit that lasts.",
            "February 15, 2023",
            &["Reading Tips", "Self-Help"],
            18,
            "John Doe",
        ),
        post(
            "blog3",
            "exploring-themes-in-the-midnight-library",
            "Exploring Themes in The Midnight Library",
            "A deep dive into the philosophical questions raised by Matt Haig's bestselling novel.",
            "January 28, 2023",
            &["Literary Analysis", "Fiction"],
            32,
            "Alice Johnson",
        ),
        post(
            "blog4",
            "interview-with-ve-schwab",
            "Interview with V.E. Schwab: The Mind Behind Addie LaRue",
            "The acclaimed author discusses her writing process, inspirations, and the creation of her immortal protagonist.",
            "December 5, 2022",
            &["Author Spotlights", "Fantasy"],
            15,
            "Bob Williams",
        ),
        post(
            "blog5",
            "best-sci-fi-books-of-2023",
            "The Best Science Fiction Books of 2023 (So Far)",
            "Our curated list of must-read science fiction novels published this year.",
            "June 20, 2023",
            &["Recommendations", "Science Fiction"],
            9,
            "Carol Brown",
        ),
        post(
            "blog6",
            "how-to-organize-your-home-library",
            "How to Organize Your Home Library Like a Pro",
            "Practical tips for arranging your physical book collection in a way that's both functional and aesthetically pleasing.",
            "April 12, 2023",
            &["Reading Tips", "Organization"],
            27,
            "Jane Smith",
        ),
    ]
}

pub fn blog_post_by_slug(slug: &str) -> Option<BlogPostDetail> {
    let related = |id: &str, title: &str, author: &str| RelatedBook {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        cover_url: "/placeholder.svg?height=150&width=100".to_string(),
    };

    match slug {
        "why-project-hail-mary-is-a-must-read" => Some(BlogPostDetail {
            id: "blog1".into(),
            slug: slug.into(),
            title: "Why Project Hail Mary is a Must-Read for Science Fiction Fans".into(),
            excerpt:
                "Andy Weir's latest novel combines hard science with heart in a way that makes it impossible to put down."
                    .into(),
            content: "When I first picked up Project Hail Mary, I expected another space survival story similar to The Martian. What I got was so much more.\n\nAndy Weir has a unique talent for making complex scientific concepts accessible and exciting. In Project Hail Mary, he takes this to a new level, weaving astrophysics, biology, and chemistry into a narrative that never feels like a textbook.\n\nThe protagonist, Ryland Grace, wakes up on a spaceship with no memory of how he got there or what his mission is. As his memories gradually return, we learn that Earth is facing an extinction-level threat from a microorganism that's consuming the sun's energy. Grace's mission is humanity's last hope.\n\nWhat sets this book apart from other hard sci-fi novels is the emotional depth. Without spoiling too much, the relationship that develops between Grace and another character is one of the most touching and original in recent science fiction.\n\nThe pacing is perfect, alternating between present-day challenges on the spaceship and flashbacks that gradually reveal how Grace ended up on this desperate mission. Each revelation is perfectly timed, keeping the pages turning late into the night.\n\nIf you enjoyed The Martian or if you're a fan of scientific problem-solving in your fiction, Project Hail Mary is an absolute must-read.".into(),
            cover_image: "/placeholder.svg?height=800&width=1200".into(),
            published_at: "March 10, 2023".into(),
            categories: vec!["Book Reviews".into(), "Science Fiction".into()],
            tags: vec![
                "andy-weir".into(),
                "space".into(),
                "first-contact".into(),
                "problem-solving".into(),
            ],
            likes: 156,
            author: Author {
                name: "Jane Smith".into(),
                image: "/placeholder.svg?height=100&width=100".into(),
            },
            related_books: vec![
                related("3", "Project Hail Mary", "Andy Weir"),
                related("11", "The Martian", "Andy Weir"),
                related("12", "Artemis", "Andy Weir"),
            ],
        }),
        "how-atomic-habits-changed-my-reading-routine" => Some(BlogPostDetail {
            id: "blog2".into(),
            slug: slug.into(),
            title: "How Atomic Habits Changed My Reading Routine".into(),
            excerpt:
                "Applying James Clear's principles to establish a consistent reading habit that lasts."
                    .into(),
            content: "For years, I struggled with maintaining a consistent reading habit. I'd go through phases: devouring books for weeks, then not touching one for months. This cycle left me feeling guilty and disconnected from one of my favorite pastimes.\n\nEnter James Clear's *Atomic Habits*. This book didn't just change how I approach reading; it transformed how I think about habit formation in general.\n\nThe first principle I applied was making my reading habit obvious. I created a dedicated reading corner in my living room with good lighting, a comfortable chair, and a small table for my tea.\n\nClear's advice to make habits easy was game-changing. Instead of setting ambitious goals like 'read 50 pages daily,' I started with just 10 minutes. Some days I'd read more, but the low threshold meant I never felt overwhelmed by the commitment.\n\nThe most powerful concept from the book was the idea of identity-based habits. Instead of focusing on the outcome (reading more books), I began to think of myself as 'a reader' - someone who reads daily because that's who they are.\n\nSix months later, I've read more books than in the previous two years combined. More importantly, reading has become an effortless part of my daily routine rather than another item on my to-do list.".into(),
            cover_image: "/placeholder.svg?height=800&width=1200".into(),
            published_at: "February 15, 2023".into(),
            categories: vec!["Reading Tips".into(), "Self-Help".into()],
            tags: vec![
                "habits".into(),
                "productivity".into(),
                "reading-tips".into(),
                "self-improvement".into(),
            ],
            likes: 203,
            author: Author {
                name: "John Doe".into(),
                image: "/placeholder.svg?height=100&width=100".into(),
            },
            related_books: vec![
                related("2", "Atomic Habits", "James Clear"),
                related("13", "Deep Work", "Cal Newport"),
                related("14", "The Power of Habit", "Charles Duhigg"),
            ],
        }),
        _ => None,
    }
}

pub fn blog_comments(post_id: &str) -> Vec<BlogComment> {
    let comment = |id: &str, content: &str, when: &str, user: ChatUser| BlogComment {
        id: id.to_string(),
        content: content.to_string(),
        created_at: when.to_string(),
        user,
    };

    match post_id {
        "blog1" => vec![
            comment(
                "comment1",
                "I completely agree with your review! The relationship between Grace and Rocky was one of the most touching things I've read in sci-fi. It really elevated the book beyond just a survival story.",
                "Yesterday",
                chat_user("user3", "Alice Johnson"),
            ),
            comment(
                "comment2",
                "The science in this book blew me away. Weir has such a talent for making complex concepts accessible without dumbing them down. I learned so much while being thoroughly entertained!",
                "Last week",
                chat_user("user4", "Bob Williams"),
            ),
            comment(
                "comment3",
                "Have you read Weir's other books? How do you think this one compares to The Martian?",
                "Last week",
                chat_user("user5", "Carol Brown"),
            ),
        ],
        "blog2" => vec![
            comment(
                "comment1",
                "I've been trying to implement the 2-minute rule from Atomic Habits for my reading as well! It's amazing how often those 2 minutes turn into an hour once I get started.",
                "Yesterday",
                chat_user("user1", "Jane Smith"),
            ),
            comment(
                "comment2",
                "Great article! I'm curious - did you find any specific tracking method that worked best for you? I've tried apps but find myself going back to a simple paper tracker.",
                "Last week",
                chat_user("user3", "Alice Johnson"),
            ),
        ],
        _ => Vec::new(),
    }
}

pub fn user_profile(_user_id: &str) -> UserProfile {
    UserProfile {
        member_since: "January 2023".into(),
        reading_goal: 24,
        favorite_genre: "Science Fiction".into(),
        stats: ReadingStats {
            total_books: 42,
            currently_reading: 3,
            completed: 18,
        },
        recent_activity: vec![
            RecentActivity {
                kind: ActivityKind::Added,
                message: "Added 'The Midnight Library' to your library".into(),
                date: "2 days ago".into(),
            },
            RecentActivity {
                kind: ActivityKind::Completed,
                message: "Marked 'Atomic Habits' as completed".into(),
                date: "1 week ago".into(),
            },
            RecentActivity {
                kind: ActivityKind::Added,
                message: "Added 'Project Hail Mary' to your wishlist".into(),
                date: "2 weeks ago".into(),
            },
        ],
    }
}

pub fn active_challenges() -> Vec<ReadingChallenge> {
    vec![
        ReadingChallenge {
            id: "1".into(),
            title: "2023 Reading Goal".into(),
            description: "Read 24 books in 2023".into(),
            progress: 18,
            total: 24,
            kind: ChallengeKind::Personal,
            participants: None,
            deadline: "December 31, 2023".into(),
            completed: false,
        },
        ReadingChallenge {
            id: "2".into(),
            title: "Science Fiction Challenge".into(),
            description: "Read 5 classic sci-fi novels".into(),
            progress: 2,
            total: 5,
            kind: ChallengeKind::Group,
            participants: Some(12),
            deadline: "November 30, 2023".into(),
            completed: false,
        },
        ReadingChallenge {
            id: "3".into(),
            title: "Summer Reading Sprint".into(),
            description: "Read 3 books during summer".into(),
            progress: 3,
            total: 3,
            kind: ChallengeKind::Personal,
            participants: None,
            deadline: "September 1, 2023".into(),
            completed: true,
        },
    ]
}

pub fn open_challenges() -> Vec<OpenChallenge> {
    let challenge = |id: &str, title: &str, description: &str, participants: u32, deadline: &str| {
        OpenChallenge {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            participants,
            deadline: deadline.to_string(),
        }
    };

    vec![
        challenge(
            "4",
            "Diverse Authors Challenge",
            "Read books by authors from 5 different countries",
            34,
            "December 31, 2023",
        ),
        challenge(
            "5",
            "Classics Club",
            "Read 10 classic novels published before 1950",
            28,
            "Ongoing",
        ),
        challenge(
            "6",
            "Genre Explorer",
            "Read one book from each of 8 different genres",
            42,
            "December 31, 2023",
        ),
    ]
}
