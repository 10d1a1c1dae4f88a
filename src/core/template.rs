use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([123])").expect("placeholder pattern is valid"));

/// 課程文件模板，佔位符 `$1` (顯示名稱)、`$2` (課程代碼)、`$3` (徽章)
#[derive(Debug, Clone)]
pub struct CourseTemplate {
    content: String,
}

impl CourseTemplate {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// 單次掃描替換，替換進去的值不會再被展開
    ///
    /// 與舊版腳本依序 `$1` -> `$2` -> `$3` 連續替換刻意不同：顯示名稱裡的
    /// `$2`/`$3` 在這裡保留原樣，舊版會被代換成課程代碼或徽章。
    pub fn render(&self, display_name: &str, code: &str, tag: &str) -> String {
        PLACEHOLDER
            .replace_all(&self.content, |caps: &Captures| match &caps[1] {
                "1" => display_name.to_string(),
                "2" => code.to_string(),
                _ => tag.to_string(),
            })
            .into_owned()
    }
}
