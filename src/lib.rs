//! Typed client for the Backpack file storage API.
//!
//! ```no_run
//! use backpack_client::{api, ApiClient, ClientConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(&ClientConfig::from_origin("https://backpack.example.com")?)?;
//! let user = api::password_login(&client, "a@b.com", "pw").await?;
//! let page = api::search_files(&client, 1, Some("cat")).await?;
//! println!("{} has {} pages of files", user.username, page.pages);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;

pub use api::client::{ApiClient, ApiResult};
pub use config::{ClientConfig, ConfigError};
