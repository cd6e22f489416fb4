//! # HTTP client for the hosted backend
//!
//! [`RemoteClient`] is the Remote-mode collaborator: a thin wrapper over
//! `reqwest` that mirrors the façade surface one method per operation. The
//! backend's schema is external to this layer; what is owned here is the
//! error translation — every network failure, non-success status, or decode
//! failure maps into the shared [`ApiError`] taxonomy, with
//! [`ApiError::BackendUnavailable`] as the catch-all. Timeout and retry
//! policy, if any, belongs to the backend client configuration, not to the
//! façades.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use store::models::{
    CommentView, MarketItemView, NewMarketItem, NewPost, PostView, ProfileUpdate, UserRecord,
};

use crate::error::ApiError;
use crate::weather::WeatherReport;

/// Client for the hosted backend API.
#[derive(Clone, Debug)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ShareCount {
    shares_count: u32,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// What a 404 means for operations that do not reference a record.
    fn no_route() -> ApiError {
        ApiError::BackendUnavailable("remote returned 404 Not Found".to_string())
    }

    /// Translate a non-success status into the shared taxonomy. `not_found`
    /// is what a 404 means for the operation at hand.
    fn map_status(status: StatusCode, not_found: ApiError) -> ApiError {
        match status {
            StatusCode::CONFLICT => ApiError::DuplicateEmail,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::NotAuthenticated,
            StatusCode::NOT_FOUND => not_found,
            other => ApiError::BackendUnavailable(format!("remote returned {other}")),
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        not_found: ApiError,
    ) -> Result<T, ApiError> {
        let resp = req
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| ApiError::BackendUnavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::map_status(status, not_found));
        }
        resp.json()
            .await
            .map_err(|e| ApiError::BackendUnavailable(e.to_string()))
    }

    async fn send_unit(
        &self,
        req: reqwest::RequestBuilder,
        not_found: ApiError,
    ) -> Result<(), ApiError> {
        let resp = req
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| ApiError::BackendUnavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::map_status(status, not_found));
        }
        Ok(())
    }

    // ---- auth ------------------------------------------------------------

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserRecord, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password, "name": name });
        self.send(
            self.http.post(self.url("/auth/signup")).json(&body),
            Self::no_route(),
        )
        .await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.send(
            self.http.post(self.url("/auth/signin")).json(&body),
            ApiError::UserNotFound,
        )
        .await
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.send_unit(self.http.post(self.url("/auth/signout")), Self::no_route())
            .await
    }

    pub async fn current_user(&self) -> Result<Option<UserRecord>, ApiError> {
        self.send(self.http.get(self.url("/auth/me")), ApiError::UserNotFound)
            .await
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<UserRecord, ApiError> {
        self.send(
            self.http
                .patch(self.url(&format!("/users/{user_id}")))
                .json(update),
            ApiError::UserNotFound,
        )
        .await
    }

    // ---- posts -----------------------------------------------------------

    pub async fn list_posts(&self) -> Result<Vec<PostView>, ApiError> {
        self.send(self.http.get(self.url("/posts")), Self::no_route())
            .await
    }

    pub async fn create_post(&self, new: &NewPost) -> Result<PostView, ApiError> {
        self.send(self.http.post(self.url("/posts")).json(new), Self::no_route())
            .await
    }

    pub async fn toggle_like(&self, post_id: &str) -> Result<PostView, ApiError> {
        self.send(
            self.http
                .post(self.url(&format!("/posts/{post_id}/likes/toggle"))),
            ApiError::PostNotFound,
        )
        .await
    }

    pub async fn add_comment(
        &self,
        post_id: &str,
        content: &str,
    ) -> Result<CommentView, ApiError> {
        let body = serde_json::json!({ "content": content });
        self.send(
            self.http
                .post(self.url(&format!("/posts/{post_id}/comments")))
                .json(&body),
            ApiError::PostNotFound,
        )
        .await
    }

    pub async fn list_comments(&self, post_id: &str) -> Result<Vec<CommentView>, ApiError> {
        self.send(
            self.http
                .get(self.url(&format!("/posts/{post_id}/comments"))),
            ApiError::PostNotFound,
        )
        .await
    }

    pub async fn increment_share(&self, post_id: &str) -> Result<u32, ApiError> {
        let count: ShareCount = self
            .send(
                self.http
                    .post(self.url(&format!("/posts/{post_id}/shares"))),
                ApiError::PostNotFound,
            )
            .await?;
        Ok(count.shares_count)
    }

    // ---- market ----------------------------------------------------------

    pub async fn list_market_items(&self) -> Result<Vec<MarketItemView>, ApiError> {
        self.send(self.http.get(self.url("/market/items")), Self::no_route())
            .await
    }

    pub async fn create_market_item(
        &self,
        new: &NewMarketItem,
    ) -> Result<MarketItemView, ApiError> {
        self.send(
            self.http.post(self.url("/market/items")).json(new),
            Self::no_route(),
        )
        .await
    }

    // ---- weather ---------------------------------------------------------

    pub async fn current_weather(&self, location: &str) -> Result<WeatherReport, ApiError> {
        self.send(
            self.http
                .get(self.url("/weather"))
                .query(&[("location", location)]),
            Self::no_route(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = RemoteClient::new("https://backend.example.com/", "key");
        assert_eq!(
            client.url("/posts"),
            "https://backend.example.com/posts"
        );
    }

    #[test]
    fn test_status_translation() {
        assert_eq!(
            RemoteClient::map_status(StatusCode::CONFLICT, ApiError::PostNotFound),
            ApiError::DuplicateEmail
        );
        assert_eq!(
            RemoteClient::map_status(StatusCode::UNAUTHORIZED, ApiError::PostNotFound),
            ApiError::NotAuthenticated
        );
        assert_eq!(
            RemoteClient::map_status(StatusCode::NOT_FOUND, ApiError::PostNotFound),
            ApiError::PostNotFound
        );
        assert!(matches!(
            RemoteClient::map_status(StatusCode::BAD_GATEWAY, ApiError::PostNotFound),
            ApiError::BackendUnavailable(_)
        ));
    }
}
