use crate::core::derive::derive_folder_name;
use crate::core::reader::parse_course_records;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{Category, CourseRecord, NavEntry};
use crate::utils::error::Result;

/// 產生 mkdocs.yml `nav` 區段用的條目，不寫任何檔案
pub struct NavigationHelper<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> NavigationHelper<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// 非 computer-science 的分類一律歸到 security 前綴
    pub fn entry_for(&self, record: &CourseRecord) -> NavEntry {
        let prefix = match record.category_tag.parse::<Category>() {
            Ok(Category::ComputerScience) => self.config.computer_prefix(),
            Ok(Category::CyberSecurity) => self.config.security_prefix(),
            Err(e) => {
                tracing::warn!(
                    "⚠️ Course '{}': {}, listing under {}",
                    record.code,
                    e,
                    self.config.security_prefix()
                );
                self.config.security_prefix()
            }
        };

        NavEntry {
            display_name: record.display_name.clone(),
            path: format!(
                "{}/{}/{}",
                prefix,
                derive_folder_name(&record.code, &record.name),
                self.config.document_name()
            ),
        }
    }

    /// 重新讀取課程表並依分類產生條目
    pub fn entries(&self) -> Result<Vec<NavEntry>> {
        let content = self.storage.read_to_string(self.config.courses_path())?;
        Ok(parse_course_records(&content)?
            .iter()
            .map(|record| self.entry_for(record))
            .collect())
    }
}
