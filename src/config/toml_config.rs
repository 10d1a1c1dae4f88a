use crate::config::GeneratorConfig;
use crate::utils::error::{CourseGenError, Result};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    pub template: Option<PathBuf>,
    pub courses: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub document: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationConfig {
    pub computer_prefix: Option<String>,
    pub security_prefix: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| CourseGenError::FileAccessError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CourseGenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COURSE_ROOT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 覆蓋到既有設定上，檔案中沒寫的欄位維持原值
    pub fn apply_to(&self, config: &mut GeneratorConfig) {
        if let Some(template) = &self.paths.template {
            config.template_path = template.clone();
        }
        if let Some(courses) = &self.paths.courses {
            config.courses_path = courses.clone();
        }
        if let Some(output) = &self.paths.output {
            config.output_path = output.clone();
        }
        if let Some(document) = &self.paths.document {
            config.document_name = document.clone();
        }
        if let Some(prefix) = &self.navigation.computer_prefix {
            config.computer_prefix = prefix.clone();
        }
        if let Some(prefix) = &self.navigation.security_prefix {
            config.security_prefix = prefix.clone();
        }
    }

    pub fn to_generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        self.apply_to(&mut config);
        config
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_generator_config().validate()
    }
}
