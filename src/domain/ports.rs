use crate::domain::model::{ExtractedDocuments, LoadOutcome, ReadmeFile, TableMode, TransformResult};
use crate::core::section::SectionPolicy;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the badge catalog markdown comes from.
pub trait CatalogSource: Send + Sync {
    fn fetch_catalog(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// The hosted repository holding the README to rewrite.
pub trait ReadmeRepository: Send + Sync {
    fn get_readme(&self) -> impl std::future::Future<Output = Result<ReadmeFile>> + Send;
    fn update_readme(
        &self,
        readme: &ReadmeFile,
        new_content: &str,
        message: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn badges(&self) -> &[String];
    fn commit_message(&self) -> &str;
    fn export_path(&self) -> Option<&str>;
    fn table_mode(&self) -> TableMode;
    fn section_policy(&self) -> SectionPolicy;
    fn dry_run(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ExtractedDocuments>;
    async fn transform(&self, documents: ExtractedDocuments) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<LoadOutcome>;
}
