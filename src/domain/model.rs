use crate::utils::error::CourseGenError;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// 課程表中的一列，欄位順序即 CSV 欄位順序
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseRecord {
    /// 課程代碼，可能帶有 `~` 之後的範圍後綴 (例如 `08305009~010`)
    pub code: String,
    pub name: String,
    pub display_name: String,
    pub category_tag: String,
    pub elective_tag: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ComputerScience,
    CyberSecurity,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ComputerScience => "computer-science",
            Category::CyberSecurity => "cyber-security",
        }
    }

    /// 徽章使用的 CSS class
    pub fn badge_class(&self) -> &'static str {
        match self {
            Category::ComputerScience => "cs-badge",
            Category::CyberSecurity => "is-badge",
        }
    }
}

impl FromStr for Category {
    type Err = CourseGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "computer-science" => Ok(Category::ComputerScience),
            "cyber-security" => Ok(Category::CyberSecurity),
            other => Err(CourseGenError::InvalidCategory {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Electiveness {
    Mandatory,
    Elective,
}

impl Electiveness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Electiveness::Mandatory => "mandatory",
            Electiveness::Elective => "elective",
        }
    }
}

impl FromStr for Electiveness {
    type Err = CourseGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mandatory" => Ok(Electiveness::Mandatory),
            "elective" => Ok(Electiveness::Elective),
            other => Err(CourseGenError::InvalidElectiveness {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Electiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一個輸出資料夾加上其中一份渲染好的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    /// 相對於輸出根目錄
    pub folder: PathBuf,
    pub file_name: String,
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub display_name: String,
    pub path: String,
}

impl fmt::Display for NavEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.display_name, self.path)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub output_root: PathBuf,
    pub artifacts_written: usize,
    pub folders: Vec<PathBuf>,
}
