//! chaingate-service — the exchange-API dispatchers.
//!
//! Two variants of one service contract:
//!
//! - [`OnlineService`] — the primary dispatcher; validates and decodes
//!   requests, calls the [`ChainClient`](chaingate_core::ChainClient) and
//!   translates every result into the protocol's canonical shapes
//! - [`OfflineService`] — a connectivity-free variant sharing the online
//!   instance's static state, answering live-data operations with the
//!   uniform offline error
//!
//! Both implement [`DataApi`] + [`ConstructionApi`] and can be stored as
//! `Arc<dyn ExchangeApi>` by the surrounding transport layer.

pub mod api;
mod construction;
pub mod offline;
pub mod online;
pub mod options;

pub use api::{ApiResult, ConstructionApi, DataApi, ExchangeApi};
pub use offline::OfflineService;
pub use online::{OnlineService, GENESIS_FETCH_TIMEOUT};
pub use options::PROTOCOL_VERSION;
