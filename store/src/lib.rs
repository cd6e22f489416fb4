pub mod codec;
pub mod entity;
pub mod error;
pub mod ids;
pub mod models;
pub mod seed;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

pub use codec::KeyValueStore;
pub use entity::EntityStore;
pub use error::StoreError;
pub use models::{
    CommentRecord, CommentView, LikeRecord, MarketItemRecord, MarketItemView, MarketStatus,
    NewMarketItem, NewPost, PostRecord, PostView, ProfileUpdate, UserRecord,
};
