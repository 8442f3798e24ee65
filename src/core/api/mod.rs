//! API client for the TTPU CRM backend.
//!
//! Layering, leaves first: `token_store` owns the credential pair,
//! `single_flight` + `refresh` keep token renewal deduplicated, `client`
//! executes one logical call with the 401 → refresh → replay protocol, and
//! the per-domain modules (`auth`, `catalog`, `intake`, `alumni`,
//! `analytics`) expose typed endpoints on top.

pub mod alumni;
pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod client;
pub mod error;
pub mod intake;
pub mod page;
pub mod refresh;
pub mod single_flight;
pub mod token_store;

pub use error::{ApiError, ApiResult};
pub use page::Page;
