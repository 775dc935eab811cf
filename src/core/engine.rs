use crate::core::{LoadOutcome, Pipeline};
use crate::utils::error::Result;

pub struct BadgeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BadgeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<LoadOutcome> {
        tracing::info!("Starting badge update...");

        // Extract
        tracing::info!("Fetching README and badge catalog...");
        let documents = self.pipeline.extract().await?;

        // Transform
        let result = self.pipeline.transform(documents).await?;
        tracing::info!(
            "Selected {} of {} catalog badges ({} not found)",
            result.selected.len(),
            result.catalog.len(),
            result.unmatched.len()
        );

        // Load
        let outcome = self.pipeline.load(result).await?;
        match &outcome {
            LoadOutcome::Committed { path } => tracing::info!("✅ Committed updated {}", path),
            LoadOutcome::Unchanged => tracing::info!("README already up to date"),
            LoadOutcome::DryRun { .. } => tracing::info!("Dry run: README not committed"),
        }

        Ok(outcome)
    }
}
