//! Plain-text rendering of records for the CLI.

use crate::models::{Comment, Post, UserSummary};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Multi-line summary of a post.
pub fn format_post(post: &Post) -> String {
    let like_marker = if post.liked_by_current_user { " (liked)" } else { "" };
    let mut out = format!(
        "[{}] {}\n  by {} on {}\n  {}\n  {} likes{}, {} comments",
        post.id,
        post.title,
        post.author.name,
        post.created_at.format(TIME_FORMAT),
        post.description,
        post.like_count,
        like_marker,
        post.comment_count,
    );
    if let Some(url) = &post.media_url {
        let kind = post.media_type.as_deref().unwrap_or("media");
        out.push_str(&format!("\n  {}: {}", kind, url));
    }
    out
}

/// Profile header of a user.
pub fn format_user(user: &UserSummary) -> String {
    let follow_marker = if user.is_followed_by_current_user {
        " (following)"
    } else {
        ""
    };
    format!(
        "({}) {} <{}>{}\n  {} followers, {} following",
        user.initials(),
        user.name,
        user.email,
        follow_marker,
        user.followers_count,
        user.following_count,
    )
}

/// One-line comment.
pub fn format_comment(comment: &Comment) -> String {
    format!(
        "[{}] {} ({}): {}",
        comment.id,
        comment.author.name,
        comment.created_at.format(TIME_FORMAT),
        comment.content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_post() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "id": "p-1", "title": "Hello", "description": "World", "likeCount": 2,
            "author": {"id": "u-1", "name": "Ada"}, "createdAt": "2024-05-01T10:00:00",
            "commentCount": 1, "likedByCurrentUser": true,
            "mediaUrl": "/uploads/p-1.png", "mediaType": "image"
        }))
        .unwrap();
        let text = format_post(&post);
        assert!(text.starts_with("[p-1] Hello\n  by Ada on 2024-05-01 10:00"));
        assert!(text.contains("2 likes (liked), 1 comments"));
        assert!(text.ends_with("image: /uploads/p-1.png"));
    }

    #[test]
    fn test_format_user() {
        let mut user = UserSummary::new("u-1", "Ada Lovelace", "ada@example.com");
        user.followers_count = 3;
        user.is_followed_by_current_user = true;
        assert_eq!(
            format_user(&user),
            "(AL) Ada Lovelace <ada@example.com> (following)\n  3 followers, 0 following"
        );
    }
}
