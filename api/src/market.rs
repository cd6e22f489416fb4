//! Marketplace operations.

use store::models::{MarketItemView, NewMarketItem};
use store::KeyValueStore;

use crate::error::ApiError;
use crate::mode::BackendMode;

/// The `market` domain façade.
pub struct MarketApi<S: KeyValueStore> {
    mode: BackendMode<S>,
}

impl<S: KeyValueStore> MarketApi<S> {
    pub fn new(mode: BackendMode<S>) -> Self {
        Self { mode }
    }

    /// All listings with resolved sellers. In Local mode the first access
    /// seeds the built-in sample set, then persists it so subsequent reads
    /// are stable.
    pub async fn list(&self) -> Result<Vec<MarketItemView>, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.list_market_items().await,
            BackendMode::Local(store) => {
                store.ensure_market_seed();
                Ok(store.list_market_items())
            }
        }
    }

    /// Create a listing for the signed-in user. Status is taken from the
    /// caller as-is.
    pub async fn create(&self, new: NewMarketItem) -> Result<MarketItemView, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.create_market_item(&new).await,
            BackendMode::Local(store) => Ok(store.create_market_item(new)?),
        }
    }
}
