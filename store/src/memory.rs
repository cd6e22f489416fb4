use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::codec::KeyValueStore;

/// In-memory KeyValueStore for testing and the default in-process medium.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::{MarketStatus, NewMarketItem, NewPost, ProfileUpdate};
    use crate::EntityStore;

    fn new_post(content: &str) -> NewPost {
        NewPost {
            content: content.to_string(),
            category: "Genel".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_sign_up_sets_session() {
        let store = EntityStore::new(MemoryStore::new());

        let user = store.sign_up("alice@example.com", "Alice").unwrap();
        assert_eq!(user.email, "alice@example.com");
        assert!(!user.verified);
        assert_eq!(user.followers_count, 0);

        let session = store.current_user().unwrap();
        assert_eq!(session.id, user.id);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = EntityStore::new(MemoryStore::new());
        store.sign_up("alice@example.com", "Alice").unwrap();

        let err = store.sign_up("Alice@Example.com ", "Other").unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail);
        // Users collection unchanged by the failed attempt.
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn test_sign_in_unknown_email() {
        let store = EntityStore::new(MemoryStore::new());
        let err = store.sign_in("nobody@example.com").unwrap_err();
        assert_eq!(err, StoreError::UserNotFound);
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_sign_out_keeps_account() {
        let store = EntityStore::new(MemoryStore::new());
        store.sign_up("alice@example.com", "Alice").unwrap();

        store.sign_out();
        assert!(store.current_user().is_none());
        // Account survives; a new sign-in restores the session.
        let user = store.sign_in("alice@example.com").unwrap();
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn test_update_profile_refreshes_session() {
        let store = EntityStore::new(MemoryStore::new());
        let user = store.sign_up("alice@example.com", "Alice").unwrap();

        let updated = store
            .update_profile(
                &user.id,
                &ProfileUpdate {
                    location: Some("Konya".to_string()),
                    bio: Some("Çiftçi".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.location.as_deref(), Some("Konya"));
        assert_eq!(updated.name, "Alice");
        assert!(updated.updated_at >= user.updated_at);

        // Session snapshot reflects the merge.
        let session = store.current_user().unwrap();
        assert_eq!(session.bio.as_deref(), Some("Çiftçi"));
    }

    #[test]
    fn test_update_profile_unknown_user() {
        let store = EntityStore::new(MemoryStore::new());
        let err = store
            .update_profile("missing", &ProfileUpdate::default())
            .unwrap_err();
        assert_eq!(err, StoreError::UserNotFound);
    }

    #[test]
    fn test_create_post_extracts_hashtags_and_copies_location() {
        let store = EntityStore::new(MemoryStore::new());
        let user = store.sign_up("alice@example.com", "Alice").unwrap();
        store
            .update_profile(
                &user.id,
                &ProfileUpdate {
                    location: Some("Antalya".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let view = store
            .create_post(new_post("Sera kuruldu #domates #sera!"))
            .unwrap();
        assert_eq!(view.post.hashtags, vec!["domates", "sera"]);
        assert_eq!(view.post.location.as_deref(), Some("Antalya"));
        assert_eq!(view.post.likes_count, 0);
        assert_eq!(view.post.comments_count, 0);
        assert_eq!(view.post.shares_count, 0);
        assert!(!view.is_liked);
        assert_eq!(view.author.as_ref().unwrap().id, user.id);
    }

    #[test]
    fn test_list_posts_newest_first() {
        let store = EntityStore::new(MemoryStore::new());
        store.sign_up("alice@example.com", "Alice").unwrap();

        store.create_post(new_post("first")).unwrap();
        store.create_post(new_post("second")).unwrap();

        let posts = store.list_posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].post.content, "second");
        assert_eq!(posts[1].post.content, "first");
    }

    #[test]
    fn test_toggle_like_is_idempotent_pairwise() {
        let store = EntityStore::new(MemoryStore::new());
        store.sign_up("alice@example.com", "Alice").unwrap();
        let post = store.create_post(new_post("Hello field")).unwrap().post;
        assert_eq!(post.likes_count, 0);

        store.sign_up("bob@example.com", "Bob").unwrap();

        let liked = store.toggle_like(&post.id).unwrap();
        assert_eq!(liked.post.likes_count, 1);
        assert!(liked.is_liked);

        let unliked = store.toggle_like(&post.id).unwrap();
        assert_eq!(unliked.post.likes_count, 0);
        assert!(!unliked.is_liked);
        assert_eq!(store.like_count(), 0);
    }

    #[test]
    fn test_is_liked_is_per_session_user() {
        let store = EntityStore::new(MemoryStore::new());
        store.sign_up("alice@example.com", "Alice").unwrap();
        let post = store.create_post(new_post("Hello field")).unwrap().post;

        store.sign_up("bob@example.com", "Bob").unwrap();
        store.toggle_like(&post.id).unwrap();

        // Bob sees his like; Alice does not.
        assert!(store.list_posts()[0].is_liked);
        store.sign_in("alice@example.com").unwrap();
        let view = &store.list_posts()[0];
        assert!(!view.is_liked);
        assert_eq!(view.post.likes_count, 1);
    }

    #[test]
    fn test_likes_count_never_goes_negative() {
        let store = EntityStore::new(MemoryStore::new());
        store.sign_up("alice@example.com", "Alice").unwrap();
        let post = store.create_post(new_post("x")).unwrap().post;

        store.toggle_like(&post.id).unwrap();
        store.toggle_like(&post.id).unwrap();
        store.toggle_like(&post.id).unwrap();

        let view = store.toggle_like(&post.id).unwrap();
        assert_eq!(view.post.likes_count, 0);
    }

    #[test]
    fn test_comments_count_matches_records() {
        let store = EntityStore::new(MemoryStore::new());
        store.sign_up("alice@example.com", "Alice").unwrap();
        let post = store.create_post(new_post("x")).unwrap().post;

        store.add_comment(&post.id, "bir").unwrap();
        store.add_comment(&post.id, "iki").unwrap();
        store.add_comment(&post.id, "üç").unwrap();

        let comments = store.list_comments(&post.id);
        assert_eq!(comments.len(), 3);
        // Oldest-first, each with a resolved author.
        assert_eq!(comments[0].comment.content, "bir");
        assert_eq!(comments[2].comment.content, "üç");
        assert!(comments.iter().all(|c| c.author.is_some()));

        let posts = store.list_posts();
        assert_eq!(posts[0].post.comments_count, 3);
        assert_eq!(posts[0].post.comments_count as usize, comments.len());
    }

    #[test]
    fn test_comment_on_missing_post() {
        let store = EntityStore::new(MemoryStore::new());
        store.sign_up("alice@example.com", "Alice").unwrap();
        let err = store.add_comment("missing", "hi").unwrap_err();
        assert_eq!(err, StoreError::PostNotFound);
    }

    #[test]
    fn test_increment_share_has_no_dedup() {
        let store = EntityStore::new(MemoryStore::new());
        store.sign_up("alice@example.com", "Alice").unwrap();
        let post = store.create_post(new_post("x")).unwrap().post;

        assert_eq!(store.increment_share(&post.id).unwrap(), 1);
        assert_eq!(store.increment_share(&post.id).unwrap(), 2);
        assert_eq!(store.increment_share(&post.id).unwrap(), 3);
    }

    #[test]
    fn test_unauthenticated_mutations_rejected_without_state_change() {
        let store = EntityStore::new(MemoryStore::new());
        store.sign_up("alice@example.com", "Alice").unwrap();
        let post = store.create_post(new_post("x")).unwrap().post;
        store.sign_out();

        assert_eq!(
            store.create_post(new_post("y")).unwrap_err(),
            StoreError::NotAuthenticated
        );
        assert_eq!(
            store.toggle_like(&post.id).unwrap_err(),
            StoreError::NotAuthenticated
        );
        assert_eq!(
            store.add_comment(&post.id, "hi").unwrap_err(),
            StoreError::NotAuthenticated
        );
        assert_eq!(
            store
                .create_market_item(NewMarketItem {
                    title: "Traktör".to_string(),
                    description: String::new(),
                    price: 1.0,
                    category: "Ekipman".to_string(),
                    location: "Konya".to_string(),
                    images: Vec::new(),
                    status: MarketStatus::Active,
                })
                .unwrap_err(),
            StoreError::NotAuthenticated
        );

        let posts = store.list_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].post.likes_count, 0);
        assert_eq!(posts[0].post.comments_count, 0);
        assert!(store.list_market_items().is_empty());
    }

    #[test]
    fn test_market_seed_runs_exactly_once() {
        let store = EntityStore::new(MemoryStore::new());

        assert!(store.ensure_market_seed());
        let seeded = store.list_market_items();
        assert!(!seeded.is_empty());
        // Seeded rows resolve their demo seller.
        assert!(seeded.iter().all(|i| i.seller.is_some()));

        assert!(!store.ensure_market_seed());
        assert_eq!(store.list_market_items().len(), seeded.len());
    }

    #[test]
    fn test_create_market_item_keeps_caller_status() {
        let store = EntityStore::new(MemoryStore::new());
        let user = store.sign_up("alice@example.com", "Alice").unwrap();

        let view = store
            .create_market_item(NewMarketItem {
                title: "Taze Biber".to_string(),
                description: "Sera ürünü".to_string(),
                price: 15.5,
                category: "Sebze".to_string(),
                location: "Antalya".to_string(),
                images: Vec::new(),
                status: MarketStatus::Sold,
            })
            .unwrap();

        assert_eq!(view.item.price, 15.5);
        assert_eq!(view.item.category, "Sebze");
        // No implicit default beyond what the caller supplied.
        assert_eq!(view.item.status, MarketStatus::Sold);
        assert_eq!(view.seller.as_ref().unwrap().id, user.id);

        let listed = store.list_market_items();
        assert!(listed
            .iter()
            .any(|i| i.item.id == view.item.id && i.seller.as_ref().unwrap().id == user.id));
    }

    #[test]
    fn test_dangling_author_is_absent_not_fatal() {
        let kv = MemoryStore::new();
        let store = EntityStore::new(kv.clone());
        store.sign_up("alice@example.com", "Alice").unwrap();
        store.create_post(new_post("x")).unwrap();

        // Users collection lost to corruption: authors no longer resolve,
        // but reads still succeed.
        kv.write(crate::entity::keys::USERS, "{corrupt");

        let posts = store.list_posts();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].author.is_none());
        assert!(store.resolve_author("missing").is_none());
    }
}
