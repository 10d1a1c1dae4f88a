use crate::core::derive::{derive_course_tag, derive_folder_name};
use crate::core::reader::parse_course_records;
use crate::core::template::CourseTemplate;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{CourseRecord, GenerationReport, OutputArtifact};
use crate::utils::error::Result;
use std::cell::OnceCell;
use std::path::PathBuf;

/// 課程資料夾與 index 文件的批次產生器
pub struct CourseGenerator<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    template: OnceCell<CourseTemplate>,
}

impl<S: Storage, C: ConfigProvider> CourseGenerator<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            template: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 模板只讀一次
    fn template(&self) -> Result<&CourseTemplate> {
        if let Some(template) = self.template.get() {
            return Ok(template);
        }

        let path = self.config.template_path();
        tracing::debug!("Loading template from: {}", path.display());
        let template = CourseTemplate::new(self.storage.read_to_string(path)?);
        Ok(self.template.get_or_init(|| template))
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CourseGenerator<S, C> {
    fn begin(&self) -> Result<GenerationReport> {
        let output_root = self.config.output_path().to_path_buf();
        self.storage.create_dir_all(&output_root)?;
        self.template()?;

        Ok(GenerationReport {
            output_root,
            ..Default::default()
        })
    }

    fn extract(&self) -> Result<Vec<CourseRecord>> {
        let path = self.config.courses_path();
        tracing::debug!("Reading course records from: {}", path.display());
        let content = self.storage.read_to_string(path)?;
        parse_course_records(&content)
    }

    fn transform(&self, record: &CourseRecord) -> Result<OutputArtifact> {
        let template = self.template()?;
        let tag = derive_course_tag(&record.category_tag, &record.elective_tag).inspect_err(|e| {
            tracing::error!("❌ Course '{}' rejected: {}", record.code, e);
        })?;

        Ok(OutputArtifact {
            folder: PathBuf::from(derive_folder_name(&record.code, &record.name)),
            file_name: self.config.document_name().to_string(),
            contents: template.render(&record.display_name, &record.code, &tag),
        })
    }

    fn load(&self, artifact: OutputArtifact, report: &mut GenerationReport) -> Result<()> {
        let folder = self.config.output_path().join(&artifact.folder);
        self.storage.create_dir_all(&folder)?;
        self.storage
            .write_file(&folder.join(&artifact.file_name), artifact.contents.as_bytes())?;

        tracing::info!("Created folder: {}", folder.display());
        report.artifacts_written += 1;
        report.folders.push(folder);
        Ok(())
    }
}
