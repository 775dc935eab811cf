use crate::core::catalog::{catalog_to_json, parse_catalog_with_mode};
use crate::core::section::replace_section_with_policy;
use crate::core::selector::select_with_report;
use crate::core::{
    CatalogSource, ConfigProvider, ExtractedDocuments, LoadOutcome, Pipeline, ReadmeRepository,
    Storage, TransformResult,
};
use crate::utils::error::Result;

/// README badge pipeline: fetch both documents, rebuild the badge section, commit if changed.
pub struct BadgePipeline<R, S, St, C>
where
    R: ReadmeRepository,
    S: CatalogSource,
    St: Storage,
    C: ConfigProvider,
{
    repository: R,
    source: S,
    storage: St,
    config: C,
}

impl<R, S, St, C> BadgePipeline<R, S, St, C>
where
    R: ReadmeRepository,
    S: CatalogSource,
    St: Storage,
    C: ConfigProvider,
{
    pub fn new(repository: R, source: S, storage: St, config: C) -> Self {
        Self {
            repository,
            source,
            storage,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<R, S, St, C> Pipeline for BadgePipeline<R, S, St, C>
where
    R: ReadmeRepository,
    S: CatalogSource,
    St: Storage,
    C: ConfigProvider,
{
    async fn extract(&self) -> Result<ExtractedDocuments> {
        // README 先取得，權限錯誤時就不必再抓目錄
        let readme = self.repository.get_readme().await?;
        tracing::debug!("Fetched {} ({} bytes)", readme.path, readme.content.len());

        let catalog_markdown = self.source.fetch_catalog().await?;
        tracing::debug!("Fetched badge catalog ({} bytes)", catalog_markdown.len());

        Ok(ExtractedDocuments {
            readme,
            catalog_markdown,
        })
    }

    async fn transform(&self, documents: ExtractedDocuments) -> Result<TransformResult> {
        let parsed = parse_catalog_with_mode(&documents.catalog_markdown, self.config.table_mode());
        tracing::debug!(
            "Parsed {} catalog records, skipped {} rows",
            parsed.records.len(),
            parsed.skipped.len()
        );
        for row in &parsed.skipped {
            tracing::trace!("Skipped row in '{}': {:?} ({:?})", row.section, row.line, row.reason);
        }

        let selection = select_with_report(&parsed.records, self.config.badges());
        if !selection.unmatched.is_empty() {
            tracing::warn!("⚠️ Badges not found in catalog: {}", selection.unmatched.join(", "));
        }
        if selection.markdown.is_empty() {
            tracing::warn!("No requested badge matched; README section left as is");
        }

        let new_content = replace_section_with_policy(
            &selection.markdown.join("\n"),
            &documents.readme.content,
            self.config.section_policy(),
        )?;

        Ok(TransformResult {
            readme: documents.readme,
            catalog: parsed.records,
            selected: selection.markdown,
            unmatched: selection.unmatched,
            new_content,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<LoadOutcome> {
        if let Some(path) = self.config.export_path() {
            let json = catalog_to_json(&result.catalog)?;
            self.storage.write_file(path, json.as_bytes()).await?;
            tracing::info!("📁 Catalog exported to {}", path);
        }

        if !result.changed() {
            tracing::debug!("README content unchanged, skipping commit");
            return Ok(LoadOutcome::Unchanged);
        }

        if self.config.dry_run() {
            return Ok(LoadOutcome::DryRun {
                content: result.new_content,
            });
        }

        self.repository
            .update_readme(&result.readme, &result.new_content, self.config.commit_message())
            .await?;
        Ok(LoadOutcome::Committed {
            path: result.readme.path,
        })
    }
}
