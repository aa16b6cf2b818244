//! Session handling and access control shared by the dashboard clients.
//!
//! The [`SessionStore`] is the single source of truth for who is using the
//! client, the [`RequestAuthorizer`] attaches that identity to outgoing
//! requests and [`Client`] runs every backend call through it.
//!
//! NB: The assumption is made that the async runtime has already been started
//! before any functions from this library that send requests are called

#![warn(unused_crate_dependencies)]


mod authorizer;
mod client;
#[cfg(not(target_arch = "wasm32"))]
pub mod configuration;
mod session_store;
mod storage;

pub use authorizer::{bearer_header_value, RequestAuthorizer};
pub use client::{Client, LoginOutcome, UiCallBack, DUMMY_ARGUMENT};
pub use session_store::SessionStore;
pub use storage::{KeyValueStore, MemoryStore, StorageError};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStore;
