//! # API crate — domain façades over a remote backend or the local store
//!
//! Feature code never talks to the hosted backend or the embedded
//! [`store::EntityStore`] directly. It goes through a per-domain façade,
//! which branches on a [`BackendMode`] decided exactly once per process
//! start: **Remote** when the backend endpoint and credential are both
//! configured, **Local** otherwise. The call contract is identical either
//! way, and a session never mixes real and locally fabricated data.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `BackendConfig` — the two external configuration values and the placeholder-aware probe |
//! | [`mode`] | `BackendMode` — the Remote/Local tagged variant shared by all façades |
//! | [`client`] | `RemoteClient` — HTTP wrapper; every failure maps into the shared error taxonomy |
//! | [`auth`] | Accounts and the session: sign-up, sign-in, sign-out, profile updates |
//! | [`posts`] | The feed: posts, likes, comments, shares |
//! | [`market`] | Marketplace listings, with explicit sample seeding in Local mode |
//! | [`weather`] | Read-only conditions for the automation dashboard; mocked in Local mode |
//! | [`error`] | `ApiError` — the taxonomy surfaced to callers |

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod market;
pub mod mode;
pub mod posts;
pub mod weather;

pub use auth::AuthApi;
pub use client::RemoteClient;
pub use config::BackendConfig;
pub use error::ApiError;
pub use market::MarketApi;
pub use mode::BackendMode;
pub use posts::PostsApi;
pub use weather::{WeatherApi, WeatherReport};
