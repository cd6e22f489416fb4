//! Feed operations: posts, likes, comments, shares.

use store::models::{CommentView, NewPost, PostView};
use store::KeyValueStore;

use crate::error::ApiError;
use crate::mode::BackendMode;

/// The `posts` domain façade.
pub struct PostsApi<S: KeyValueStore> {
    mode: BackendMode<S>,
}

impl<S: KeyValueStore> PostsApi<S> {
    pub fn new(mode: BackendMode<S>) -> Self {
        Self { mode }
    }

    /// All posts, newest-first, with resolved authors and the per-session
    /// `is_liked` flag.
    pub async fn list(&self) -> Result<Vec<PostView>, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.list_posts().await,
            BackendMode::Local(store) => Ok(store.list_posts()),
        }
    }

    /// Create a post for the signed-in user.
    pub async fn create(&self, new: NewPost) -> Result<PostView, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.create_post(&new).await,
            BackendMode::Local(store) => Ok(store.create_post(new)?),
        }
    }

    /// Toggle the signed-in user's like on a post.
    pub async fn toggle_like(&self, post_id: &str) -> Result<PostView, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.toggle_like(post_id).await,
            BackendMode::Local(store) => Ok(store.toggle_like(post_id)?),
        }
    }

    /// Comment on a post as the signed-in user.
    pub async fn add_comment(
        &self,
        post_id: &str,
        content: &str,
    ) -> Result<CommentView, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.add_comment(post_id, content).await,
            BackendMode::Local(store) => Ok(store.add_comment(post_id, content)?),
        }
    }

    /// All comments on a post, oldest-first.
    pub async fn list_comments(&self, post_id: &str) -> Result<Vec<CommentView>, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.list_comments(post_id).await,
            BackendMode::Local(store) => Ok(store.list_comments(post_id)),
        }
    }

    /// Record a share button press. No dedup; returns the new count.
    pub async fn increment_share(&self, post_id: &str) -> Result<u32, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.increment_share(post_id).await,
            BackendMode::Local(store) => Ok(store.increment_share(post_id)?),
        }
    }
}
