//! Client for the Akamai Bot Manager endpoints of the Application Security API.
//!
//! Every operation follows the same shape: validate the request, build the
//! resource path, send it through a [`Transport`], then decode the JSON body
//! or map the response to an [`ApiError`].
//!
//! # Module Structure
//!
//! - [`session`] - the transport seam and the reqwest-backed [`HttpSession`]
//! - [`resource`] - request and response types, one module per resource family
//! - [`config`] - client configuration loaded from disk and environment
//! - [`error`] - the crate error type and the remote error document
//!
//! # Example
//!
//! ```ignore
//! use botman::{Botman, GetCustomBotCategoryListRequest, HttpSession};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Botman::new(HttpSession::new("https://akab-host.luna.akamaiapis.net")?);
//!     let list = client
//!         .get_custom_bot_category_list(&GetCustomBotCategoryListRequest {
//!             config_id: 43253,
//!             version: 15,
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("{} categories", list.categories.len());
//!     Ok(())
//! }
//! ```

mod client;
pub mod config;
pub mod error;
pub mod resource;
pub mod session;
mod validation;

/// Opaque JSON object as returned by most Bot Manager endpoints.
pub type Record = serde_json::Map<String, serde_json::Value>;

pub use client::Botman;
pub use config::ClientConfig;
pub use error::{ApiError, Error, Result};
pub use resource::*;
pub use session::{ApiRequest, ApiResponse, HttpSession, Transport, TransportError};
pub use validation::{Validate, ValidationErrors};
