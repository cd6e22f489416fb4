//! # Remote/Local backend selection
//!
//! One [`BackendMode`] value is constructed per process start and handed to
//! every domain façade — the configuration is probed exactly once, and there
//! is no transition between the two states at runtime. A Remote-mode failure
//! surfaces as [`crate::ApiError::BackendUnavailable`] instead of silently
//! falling back to Local, so a user is never shown a mix of real and
//! fabricated data within one session.

use std::sync::Arc;

use store::{EntityStore, KeyValueStore};

use crate::client::RemoteClient;
use crate::config::BackendConfig;

/// Where domain operations are routed. Fixed for the process lifetime.
pub enum BackendMode<S: KeyValueStore> {
    /// A configured hosted backend.
    Remote(RemoteClient),
    /// The embedded entity store — demo mode when no backend is configured.
    Local(Arc<EntityStore<S>>),
}

impl<S: KeyValueStore> BackendMode<S> {
    /// Probe the configuration once and pick a mode. A partial configuration
    /// (endpoint without credential, or placeholder values) selects Local.
    pub fn detect(config: &BackendConfig, store: Arc<EntityStore<S>>) -> Self {
        if config.is_configured() {
            let endpoint = config.endpoint.clone().unwrap_or_default();
            let api_key = config.api_key.clone().unwrap_or_default();
            tracing::debug!(%endpoint, "remote backend configured");
            BackendMode::Remote(RemoteClient::new(endpoint, api_key))
        } else {
            tracing::debug!("no remote backend configured, using local store");
            BackendMode::Local(store)
        }
    }
}

impl<S: KeyValueStore> Clone for BackendMode<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Remote(client) => Self::Remote(client.clone()),
            Self::Local(store) => Self::Local(Arc::clone(store)),
        }
    }
}
