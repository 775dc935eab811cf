pub mod catalog;
pub mod engine;
pub mod pipeline;
pub mod section;
pub mod selector;

pub use crate::domain::model::{
    BadgeRecord, Catalog, ExtractedDocuments, LoadOutcome, ReadmeFile, TransformResult,
};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, Pipeline, ReadmeRepository, Storage};
pub use crate::utils::error::Result;
