//! REST client and local persistence for the dashboard.

pub mod api;
pub mod notifications;
pub mod resource;
pub mod storage;

pub use api::ApiClient;
pub use resource::ApiResource;
pub use storage::{platform_store, KeyValueStore, MemoryStore, SessionPersistence};
