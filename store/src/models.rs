//! # Record models for the local entity store
//!
//! Five persisted record types ([`UserRecord`], [`PostRecord`],
//! [`CommentRecord`], [`LikeRecord`], [`MarketItemRecord`]) plus the
//! read-side view types that carry their resolved relations
//! ([`PostView`], [`CommentView`], [`MarketItemView`]).
//!
//! All records are `Serialize + Deserialize` so collections round-trip
//! through the codec, and every field that was added after first release
//! carries `#[serde(default)]` — a document written by an older build loads
//! with the missing fields defaulted instead of failing to parse.
//!
//! Counters (`likes_count`, `comments_count`, `shares_count`) are owned by
//! [`crate::EntityStore`]'s own operations; callers never write them
//! directly. `is_liked` is never persisted — it is derived at read time from
//! the likes collection and the current session user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub followers_count: u32,
    #[serde(default)]
    pub following_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A feed post, owned by its author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub shares_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment on a post. Creating one is the only way the parent's
/// `comments_count` changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub likes_count: u32,
    pub created_at: DateTime<Utc>,
}

/// A like fact. The existence of a `(user_id, post_id)` pair is the sole
/// source of truth for "has this user liked this post".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeRecord {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle state of a marketplace listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    Active,
    Sold,
    Inactive,
}

/// A marketplace listing, owned by its creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItemRecord {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: MarketStatus,
    pub created_at: DateTime<Utc>,
}

/// A post annotated with its resolved author and the session-derived
/// `is_liked` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    pub post: PostRecord,
    /// Absent when the author id no longer resolves.
    pub author: Option<UserRecord>,
    pub is_liked: bool,
}

/// A comment annotated with its resolved author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    pub comment: CommentRecord,
    pub author: Option<UserRecord>,
}

/// A market item annotated with its resolved seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItemView {
    pub item: MarketItemRecord,
    pub seller: Option<UserRecord>,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

/// Input for creating a post. Location is copied from the author, not
/// supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Input for creating a market item. Status is whatever the caller supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMarketItem {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: MarketStatus,
}

/// Extract `#`-prefixed hashtags from post content, in order of appearance.
/// Trailing punctuation is dropped; duplicates are kept.
pub fn extract_hashtags(content: &str) -> Vec<String> {
    content
        .split_whitespace()
        .filter_map(|token| {
            let tag: String = token
                .strip_prefix('#')?
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if tag.is_empty() {
                None
            } else {
                Some(tag)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hashtags() {
        assert_eq!(
            extract_hashtags("Hasat bitti #buğday #hasat2026!"),
            vec!["buğday", "hasat2026"]
        );
        assert!(extract_hashtags("no tags here").is_empty());
        // A bare '#' is not a tag.
        assert!(extract_hashtags("# #").is_empty());
        // Order preserved, duplicates kept.
        assert_eq!(extract_hashtags("#a #b #a"), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_missing_fields_default_on_load() {
        // A record written before `hashtags` and the counters existed.
        let legacy = r#"{
            "id": "p1",
            "user_id": "u1",
            "content": "eski kayıt",
            "category": "Genel",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;

        let post: PostRecord = serde_json::from_str(legacy).unwrap();
        assert!(post.hashtags.is_empty());
        assert_eq!(post.likes_count, 0);
        assert!(post.image_url.is_none());
    }

    #[test]
    fn test_market_status_wire_form() {
        assert_eq!(
            serde_json::to_string(&MarketStatus::Active).unwrap(),
            "\"active\""
        );
        let status: MarketStatus = serde_json::from_str("\"sold\"").unwrap();
        assert_eq!(status, MarketStatus::Sold);
    }
}
