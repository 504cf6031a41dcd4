//! FurniLayout storefront: the public pages of the furniture layout
//! product as headless view models over the catalog HTTP API.

pub mod api;
pub mod config;
pub mod contact;
pub mod error;
pub mod fallback;
pub mod fetcher;
pub mod footer;
pub mod gallery;
pub mod house_types;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod paths;
pub mod storefront;
pub mod tour;

#[cfg(test)]
mod testing;

pub use api::{CatalogApi, HttpCatalogApi, LayoutScope};
pub use config::{load_config, save_config, NotificationMode, StorefrontConfig};
pub use contact::{ContactModal, SubmitOutcome};
pub use error::{Result, StorefrontError};
pub use navigation::Navigation;
pub use notify::{NotificationManager, Notifier};
pub use storefront::Storefront;
