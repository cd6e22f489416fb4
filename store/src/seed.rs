//! Built-in sample data for demo (Local) mode.
//!
//! The market collection starts empty on a fresh install; without a remote
//! backend the marketplace page would be blank. [`sample_market_items`]
//! produces a small fixed set of listings owned by a demo seller account.
//! Seeding is an explicit step (see
//! [`EntityStore::ensure_market_seed`](crate::EntityStore::ensure_market_seed)),
//! runs once, and is persisted so later reads are stable.

use chrono::Utc;

use crate::ids;
use crate::models::{MarketItemRecord, MarketStatus, UserRecord};

/// The demo account that owns the seeded listings.
fn demo_seller() -> UserRecord {
    let now = Utc::now();
    UserRecord {
        id: "agrifeed-demo-seller".to_string(),
        email: "demo@agrifeed.example".to_string(),
        name: "AgriFeed Demo Çiftliği".to_string(),
        avatar_url: None,
        location: Some("Antalya".to_string()),
        bio: Some("Örnek ilanların sahibi demo hesap.".to_string()),
        verified: true,
        followers_count: 0,
        following_count: 0,
        created_at: now,
        updated_at: now,
    }
}

/// A small built-in market listing set, all owned by the demo seller.
/// Content is fixed; ids and timestamps are fresh at seed time.
pub fn sample_market_items() -> (UserRecord, Vec<MarketItemRecord>) {
    let seller = demo_seller();
    let now = Utc::now();

    let item = |title: &str, description: &str, price: f64, category: &str| MarketItemRecord {
        id: ids::new_id(),
        user_id: seller.id.clone(),
        title: title.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        location: "Antalya".to_string(),
        images: Vec::new(),
        status: MarketStatus::Active,
        created_at: now,
    };

    let items = vec![
        item("Taze Domates", "Sera ürünü, günlük hasat.", 12.0, "Sebze"),
        item("Organik Elma", "İlaçsız, soğuk hava deposundan.", 18.5, "Meyve"),
        item("Buğday Tohumu", "Sertifikalı ekmeklik tohum, 25 kg çuval.", 340.0, "Tohum"),
        item("Damla Sulama Seti", "200 m hat, filtre dahil.", 1250.0, "Ekipman"),
    ];

    (seller, items)
}
