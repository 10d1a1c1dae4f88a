#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, validate_non_empty_string, validate_path, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_TEMPLATE_PATH: &str = "template.md";
pub const DEFAULT_COURSES_PATH: &str = "courses.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "outputs";
pub const DEFAULT_DOCUMENT_NAME: &str = "index.md";
pub const DEFAULT_COMPUTER_PREFIX: &str = "1_course_computer";
pub const DEFAULT_SECURITY_PREFIX: &str = "2_course_security";

/// 預設值、TOML 檔案與命令列合併後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub template_path: PathBuf,
    pub courses_path: PathBuf,
    pub output_path: PathBuf,
    pub document_name: String,
    pub computer_prefix: String,
    pub security_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            courses_path: PathBuf::from(DEFAULT_COURSES_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            document_name: DEFAULT_DOCUMENT_NAME.to_string(),
            computer_prefix: DEFAULT_COMPUTER_PREFIX.to_string(),
            security_prefix: DEFAULT_SECURITY_PREFIX.to_string(),
        }
    }
}

impl ConfigProvider for GeneratorConfig {
    fn template_path(&self) -> &Path {
        &self.template_path
    }

    fn courses_path(&self) -> &Path {
        &self.courses_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn document_name(&self) -> &str {
        &self.document_name
    }

    fn computer_prefix(&self) -> &str {
        &self.computer_prefix
    }

    fn security_prefix(&self) -> &str {
        &self.security_prefix
    }
}

impl<C: ConfigProvider> ConfigProvider for &C {
    fn template_path(&self) -> &Path {
        (**self).template_path()
    }

    fn courses_path(&self) -> &Path {
        (**self).courses_path()
    }

    fn output_path(&self) -> &Path {
        (**self).output_path()
    }

    fn document_name(&self) -> &str {
        (**self).document_name()
    }

    fn computer_prefix(&self) -> &str {
        (**self).computer_prefix()
    }

    fn security_prefix(&self) -> &str {
        (**self).security_prefix()
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validate_path("paths.template", &self.template_path.to_string_lossy())?;
        validate_path("paths.courses", &self.courses_path.to_string_lossy())?;
        if self.courses_path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
            tracing::warn!(
                "⚠️ Course catalog '{}' has no .csv extension, reading it as CSV anyway",
                self.courses_path.display()
            );
        }
        validate_path("paths.output", &self.output_path.to_string_lossy())?;
        validate_file_name("paths.document", &self.document_name)?;
        validate_non_empty_string("navigation.computer_prefix", &self.computer_prefix)?;
        validate_non_empty_string("navigation.security_prefix", &self.security_prefix)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_script_layout() {
        let config = GeneratorConfig::default();
        assert_eq!(config.template_path(), Path::new("template.md"));
        assert_eq!(config.courses_path(), Path::new("courses.csv"));
        assert_eq!(config.output_path(), Path::new("outputs"));
        assert_eq!(config.document_name(), "index.md");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catalog_extension_is_not_enforced() {
        let config = GeneratorConfig {
            courses_path: PathBuf::from("catalog.txt"),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = GeneratorConfig {
            courses_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            document_name: "sub/index.md".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            security_prefix: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
