//! API client module for Backpack.
//!
//! Provides the HTTP client wrapper, one function per REST endpoint grouped by
//! route scope, and request/response types matching the Backpack server API.

pub mod application;
pub mod auth;
pub mod client;
pub mod file;
pub mod info;
pub mod types;
pub mod user;

pub use application::{
    application_create, delete_application, get_all_applications, get_application,
    get_application_token,
};
pub use auth::{logout, password_login};
pub use client::{ApiClient, ApiResult};
pub use file::{delete_file, get_file, get_usage, search_files, upload_file};
pub use info::get_app_info;
pub use user::{get_user_data, resend_code, update_settings, user_create, verify};
