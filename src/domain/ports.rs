use crate::domain::model::{CourseRecord, GenerationReport, OutputArtifact};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    /// 已存在時不視為錯誤
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn template_path(&self) -> &Path;
    fn courses_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn document_name(&self) -> &str;
    fn computer_prefix(&self) -> &str;
    fn security_prefix(&self) -> &str;
}

/// 逐筆處理：每筆記錄 transform 後立即 load
pub trait Pipeline {
    /// 在讀取任何記錄之前執行，回傳空的報告
    fn begin(&self) -> Result<GenerationReport>;
    fn extract(&self) -> Result<Vec<CourseRecord>>;
    fn transform(&self, record: &CourseRecord) -> Result<OutputArtifact>;
    fn load(&self, artifact: OutputArtifact, report: &mut GenerationReport) -> Result<()>;
}
