//! Order Sync
//!
//! Ordered-collection synchronization for admin "rearrange" screens:
//! - client: fetch a collection and normalize it into orderable items
//! - gesture / session: local drag reordering, no network per move
//! - gateway: persist the full ordered id list under a role gate
//!
//! Runs natively and on `wasm32` (reqwest uses `fetch` there).

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod gesture;
pub mod model;
pub mod notice;
pub mod session;
pub mod source;
pub mod wire;

pub use auth::{AuthorizationContext, ADMIN_ROLE};
pub use client::{normalize, LoadReport, OrderStoreClient};
pub use config::SyncConfig;
pub use error::{SyncError, SyncResult};
pub use gateway::{Confirmation, OrderGateway};
pub use gesture::{DragGesture, GestureState, MoveOutcome};
pub use model::{by_label, by_rank, ItemComparator, OrderableItem, OrderedCollection};
pub use notice::{Notice, NoticeKind};
pub use session::ReorderSession;
pub use source::{CollectionSource, MapItem};
pub use wire::{ApiResponse, ReorderRequest};
