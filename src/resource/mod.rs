//! Bot Manager resources
//!
//! Each submodule adds one family of operations to [`crate::Botman`] together
//! with its request and response types. Request types implement
//! [`crate::Validate`]; response types are either named list wrappers over
//! [`crate::Record`], a bare `Record`, or a small typed struct.
//!
//! # Families
//!
//! - [`catalog`] - Akamai-wide catalogues and the endpoint coverage report
//! - [`category_actions`] - per-policy actions for categories and detections
//! - [`settings`] - single-document policy and configuration settings
//! - [`custom_bot_category`] - custom categories and their sequences
//! - [`custom_bots`] - custom clients, custom-defined and recategorized bots
//! - [`response_actions`] - challenge, conditional, deny and alternate actions
//! - [`content_protection`] - content protection rules and their order
//! - [`transactional_endpoint`] - bot protection on transactional endpoints
//!
//! List operations filter client-side with [`filter_records`] when the
//! request names an item id.

pub mod catalog;
pub mod category_actions;
pub mod content_protection;
pub mod custom_bot_category;
pub mod custom_bots;
mod filter;
pub mod response_actions;
pub mod settings;
pub mod transactional_endpoint;

pub use catalog::*;
pub use category_actions::*;
pub use content_protection::*;
pub use custom_bot_category::*;
pub use custom_bots::*;
pub use filter::filter_records;
pub use response_actions::*;
pub use settings::*;
pub use transactional_endpoint::*;
