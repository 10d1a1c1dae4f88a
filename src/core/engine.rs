use crate::core::Pipeline;
use crate::domain::model::{GenerationReport, OutputArtifact};
use crate::utils::error::Result;

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// 逐筆產生並寫入；中途失敗時已寫入的檔案保留
    pub fn run(&self) -> Result<GenerationReport> {
        tracing::info!("Starting batch generation...");

        let mut report = self.pipeline.begin()?;
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} course records", records.len());

        for record in &records {
            let artifact = self.pipeline.transform(record)?;
            self.pipeline.load(artifact, &mut report)?;
        }

        tracing::info!("Batch processing completed.");
        Ok(report)
    }

    /// 只做 extract 與 transform，全部記錄都檢查過才回傳，不寫入檔案
    pub fn dry_run(&self) -> Result<Vec<OutputArtifact>> {
        tracing::info!("🔍 DRY RUN - nothing will be written");

        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} course records", records.len());

        let artifacts = records
            .iter()
            .map(|record| self.pipeline.transform(record))
            .collect::<Result<Vec<_>>>()?;

        for artifact in &artifacts {
            tracing::info!(
                "Would create: {}",
                artifact.folder.join(&artifact.file_name).display()
            );
        }
        Ok(artifacts)
    }
}
