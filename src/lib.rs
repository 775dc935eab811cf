pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{github::GitHubClient, http::HttpCatalogSource, storage::LocalStorage};
pub use config::ActionConfig;
pub use core::{engine::BadgeEngine, pipeline::BadgePipeline};
pub use utils::error::{BadgeError, Result};
