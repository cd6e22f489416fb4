//! # Entity store — collections, session, joins, counters
//!
//! [`EntityStore`] owns five persisted collections (users, posts, comments,
//! likes, market items) plus a single-record session slot, all living behind
//! a [`KeyValueStore`] medium. It is an explicit object injected into the
//! domain façades — there is no ambient process-wide state, so tests get an
//! isolated instance each.
//!
//! ## Operation shape
//!
//! Every operation performs at most one load and one store per collection it
//! touches, synchronously: a read-modify-write sequence like
//! [`toggle_like`](EntityStore::toggle_like) completes before any other
//! operation can observe the collection. The store is single-writer by
//! construction and trusts its caller to supply well-formed input.
//!
//! ## Counters
//!
//! `likes_count`, `comments_count` and `shares_count` are mutated only here:
//! toggle-like is the sole path for likes, add-comment for comments, and
//! increment-share for shares (unconditional, no dedup — it models a share
//! button press, not a unique-share fact).

use chrono::Utc;

use crate::codec::{self, KeyValueStore};
use crate::error::StoreError;
use crate::ids;
use crate::models::{
    extract_hashtags, CommentRecord, CommentView, LikeRecord, MarketItemRecord, MarketItemView,
    NewMarketItem, NewPost, PostRecord, PostView, ProfileUpdate, UserRecord,
};
use crate::seed;

/// Fixed, versionless key namespace — one key per collection. Structural
/// changes stay backward-compatible by defaulting missing fields.
pub mod keys {
    pub const USERS: &str = "agrifeed_users";
    pub const POSTS: &str = "agrifeed_posts";
    pub const COMMENTS: &str = "agrifeed_comments";
    pub const LIKES: &str = "agrifeed_likes";
    pub const MARKET_ITEMS: &str = "agrifeed_market_items";
    pub const CURRENT_USER: &str = "agrifeed_current_user";
}

/// The local entity store backed by a KeyValueStore medium.
pub struct EntityStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> EntityStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    fn users(&self) -> Vec<UserRecord> {
        codec::load(&self.kv, keys::USERS, Vec::new())
    }

    fn save_users(&self, users: &[UserRecord]) {
        codec::store(&self.kv, keys::USERS, &users);
    }

    fn posts(&self) -> Vec<PostRecord> {
        codec::load(&self.kv, keys::POSTS, Vec::new())
    }

    fn save_posts(&self, posts: &[PostRecord]) {
        codec::store(&self.kv, keys::POSTS, &posts);
    }

    fn comments(&self) -> Vec<CommentRecord> {
        codec::load(&self.kv, keys::COMMENTS, Vec::new())
    }

    fn save_comments(&self, comments: &[CommentRecord]) {
        codec::store(&self.kv, keys::COMMENTS, &comments);
    }

    fn likes(&self) -> Vec<LikeRecord> {
        codec::load(&self.kv, keys::LIKES, Vec::new())
    }

    fn save_likes(&self, likes: &[LikeRecord]) {
        codec::store(&self.kv, keys::LIKES, &likes);
    }

    fn market_items(&self) -> Vec<MarketItemRecord> {
        codec::load(&self.kv, keys::MARKET_ITEMS, Vec::new())
    }

    fn save_market_items(&self, items: &[MarketItemRecord]) {
        codec::store(&self.kv, keys::MARKET_ITEMS, &items);
    }

    // ---- session -------------------------------------------------------

    /// The currently signed-in user, if any. A distinguished single-record
    /// slot, separate from the users collection, so signing out never
    /// deletes the account.
    pub fn current_user(&self) -> Option<UserRecord> {
        codec::load(&self.kv, keys::CURRENT_USER, None)
    }

    fn set_current_user(&self, user: Option<&UserRecord>) {
        codec::store(&self.kv, keys::CURRENT_USER, &user);
    }

    // ---- users ---------------------------------------------------------

    /// Create an account and open a session for it. Email uniqueness is
    /// enforced here, case-insensitively.
    pub fn sign_up(&self, email: &str, name: &str) -> Result<UserRecord, StoreError> {
        let email = email.trim().to_lowercase();
        let mut users = self.users();
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let user = UserRecord {
            id: ids::new_id(),
            email,
            name: name.trim().to_string(),
            avatar_url: None,
            location: None,
            bio: None,
            verified: false,
            followers_count: 0,
            following_count: 0,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        self.save_users(&users);
        self.set_current_user(Some(&user));
        Ok(user)
    }

    /// Look up an account by email and open a session for it. No password
    /// check: password authentication belongs to the remote backend, and
    /// this path is a demo-mode convenience, not a security boundary.
    pub fn sign_in(&self, email: &str) -> Result<UserRecord, StoreError> {
        let email = email.trim().to_lowercase();
        let user = self
            .users()
            .into_iter()
            .find(|u| u.email == email)
            .ok_or(StoreError::UserNotFound)?;
        self.set_current_user(Some(&user));
        Ok(user)
    }

    /// Clear the session slot. The users collection is untouched.
    pub fn sign_out(&self) {
        self.set_current_user(None);
    }

    /// Merge the supplied partial fields into an existing account. When the
    /// target is the session user, the session snapshot is refreshed so
    /// subsequent reads stay consistent.
    pub fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<UserRecord, StoreError> {
        let mut users = self.users();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::UserNotFound)?;

        if let Some(name) = &update.name {
            user.name = name.clone();
        }
        if let Some(avatar_url) = &update.avatar_url {
            user.avatar_url = Some(avatar_url.clone());
        }
        if let Some(location) = &update.location {
            user.location = Some(location.clone());
        }
        if let Some(bio) = &update.bio {
            user.bio = Some(bio.clone());
        }
        user.updated_at = Utc::now();

        let updated = user.clone();
        self.save_users(&users);
        if self.current_user().is_some_and(|u| u.id == updated.id) {
            self.set_current_user(Some(&updated));
        }
        Ok(updated)
    }

    /// Resolve a user id to its record. Dangling references come back as
    /// `None`; they never fail a read.
    pub fn resolve_author(&self, user_id: &str) -> Option<UserRecord> {
        self.users().into_iter().find(|u| u.id == user_id)
    }

    /// Number of registered accounts.
    pub fn user_count(&self) -> usize {
        self.users().len()
    }

    // ---- posts ---------------------------------------------------------

    /// All posts, newest-first, with resolved authors and the `is_liked`
    /// flag derived against the current session user.
    pub fn list_posts(&self) -> Vec<PostView> {
        let users = self.users();
        let likes = self.likes();
        let session = self.current_user();

        let mut posts = self.posts();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
            .into_iter()
            .map(|post| {
                let author = users.iter().find(|u| u.id == post.user_id).cloned();
                let is_liked = session.as_ref().is_some_and(|me| {
                    likes
                        .iter()
                        .any(|l| l.user_id == me.id && l.post_id == post.id)
                });
                PostView {
                    post,
                    author,
                    is_liked,
                }
            })
            .collect()
    }

    /// Create a post for the session user. Hashtags are extracted from the
    /// content, counters start at zero, and the author's location is copied
    /// onto the post as a convenience field.
    pub fn create_post(&self, new: NewPost) -> Result<PostView, StoreError> {
        let author = self.current_user().ok_or(StoreError::NotAuthenticated)?;

        let now = Utc::now();
        let post = PostRecord {
            id: ids::new_id(),
            user_id: author.id.clone(),
            hashtags: extract_hashtags(&new.content),
            content: new.content,
            category: new.category,
            image_url: new.image_url,
            location: author.location.clone(),
            likes_count: 0,
            comments_count: 0,
            shares_count: 0,
            created_at: now,
            updated_at: now,
        };

        let mut posts = self.posts();
        posts.insert(0, post.clone());
        self.save_posts(&posts);

        Ok(PostView {
            post,
            author: Some(author),
            is_liked: false,
        })
    }

    /// Toggle the session user's like on a post. The sole mutation path for
    /// `likes_count`: remove-and-decrement (floored at zero) when the
    /// (user, post) pair exists, insert-and-increment otherwise.
    pub fn toggle_like(&self, post_id: &str) -> Result<PostView, StoreError> {
        let me = self.current_user().ok_or(StoreError::NotAuthenticated)?;

        let mut posts = self.posts();
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(StoreError::PostNotFound)?;

        let mut likes = self.likes();
        let existing = likes
            .iter()
            .position(|l| l.user_id == me.id && l.post_id == post_id);

        let is_liked = match existing {
            Some(idx) => {
                likes.remove(idx);
                post.likes_count = post.likes_count.saturating_sub(1);
                false
            }
            None => {
                likes.push(LikeRecord {
                    id: ids::new_id(),
                    user_id: me.id.clone(),
                    post_id: post_id.to_string(),
                    created_at: Utc::now(),
                });
                post.likes_count += 1;
                true
            }
        };

        let updated = post.clone();
        self.save_likes(&likes);
        self.save_posts(&posts);

        let author = self.resolve_author(&updated.user_id);
        Ok(PostView {
            post: updated,
            author,
            is_liked,
        })
    }

    /// Append a comment for the session user and bump the parent post's
    /// `comments_count` — the only way that counter changes.
    pub fn add_comment(&self, post_id: &str, content: &str) -> Result<CommentView, StoreError> {
        let me = self.current_user().ok_or(StoreError::NotAuthenticated)?;

        let mut posts = self.posts();
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(StoreError::PostNotFound)?;
        post.comments_count += 1;

        let comment = CommentRecord {
            id: ids::new_id(),
            post_id: post_id.to_string(),
            user_id: me.id.clone(),
            content: content.to_string(),
            likes_count: 0,
            created_at: Utc::now(),
        };

        let mut comments = self.comments();
        comments.push(comment.clone());
        self.save_comments(&comments);
        self.save_posts(&posts);

        Ok(CommentView {
            comment,
            author: Some(me),
        })
    }

    /// All comments for a post, oldest-first, with resolved authors.
    pub fn list_comments(&self, post_id: &str) -> Vec<CommentView> {
        let users = self.users();
        let mut comments: Vec<CommentRecord> = self
            .comments()
            .into_iter()
            .filter(|c| c.post_id == post_id)
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        comments
            .into_iter()
            .map(|comment| {
                let author = users.iter().find(|u| u.id == comment.user_id).cloned();
                CommentView { comment, author }
            })
            .collect()
    }

    /// Bump a post's `shares_count` and return the new value. Repeated calls
    /// keep incrementing.
    pub fn increment_share(&self, post_id: &str) -> Result<u32, StoreError> {
        let mut posts = self.posts();
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(StoreError::PostNotFound)?;
        post.shares_count += 1;
        let count = post.shares_count;
        self.save_posts(&posts);
        Ok(count)
    }

    /// Number of like facts currently stored.
    pub fn like_count(&self) -> usize {
        self.likes().len()
    }

    // ---- market --------------------------------------------------------

    /// Seed the built-in sample listings when the market collection is
    /// empty, and persist them so subsequent reads are stable. Returns
    /// whether seeding ran. Called explicitly by the Local-mode adapter on
    /// first access — never implicitly inside a read path.
    pub fn ensure_market_seed(&self) -> bool {
        if !self.market_items().is_empty() {
            return false;
        }
        tracing::debug!("seeding built-in market items");

        let (seller, items) = seed::sample_market_items();
        let mut users = self.users();
        if !users.iter().any(|u| u.id == seller.id) {
            users.push(seller);
            self.save_users(&users);
        }
        self.save_market_items(&items);
        true
    }

    /// All market items, newest-first, with resolved sellers.
    pub fn list_market_items(&self) -> Vec<MarketItemView> {
        let users = self.users();
        let mut items = self.market_items();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
            .into_iter()
            .map(|item| {
                let seller = users.iter().find(|u| u.id == item.user_id).cloned();
                MarketItemView { item, seller }
            })
            .collect()
    }

    /// Create a listing for the session user. Status is taken from the
    /// caller as-is.
    pub fn create_market_item(
        &self,
        new: NewMarketItem,
    ) -> Result<MarketItemView, StoreError> {
        let me = self.current_user().ok_or(StoreError::NotAuthenticated)?;

        let item = MarketItemRecord {
            id: ids::new_id(),
            user_id: me.id.clone(),
            title: new.title,
            description: new.description,
            price: new.price,
            category: new.category,
            location: new.location,
            images: new.images,
            status: new.status,
            created_at: Utc::now(),
        };

        let mut items = self.market_items();
        items.push(item.clone());
        self.save_market_items(&items);

        Ok(MarketItemView {
            item,
            seller: Some(me),
        })
    }
}
