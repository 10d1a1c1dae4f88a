use crate::domain::model::{Category, Electiveness};
use crate::utils::error::Result;

/// 課程代碼範圍後綴的分隔字元
pub const CODE_RANGE_SEPARATOR: char = '~';

/// 由分類與必選修產生課程徽章的 HTML 片段
///
/// 只接受 `computer-science` / `cyber-security` 與 `mandatory` / `elective`，
/// 分類先檢查。
///
/// ```
/// use course_gen::core::derive::derive_course_tag;
///
/// let tag = derive_course_tag("computer-science", "mandatory").unwrap();
/// assert_eq!(tag, r#"<span class="badge cs-badge">computer-science <mandatory></span>"#);
/// ```
pub fn derive_course_tag(category: &str, electiveness: &str) -> Result<String> {
    let category: Category = category.parse()?;
    let electiveness: Electiveness = electiveness.parse()?;

    Ok(format!(
        r#"<span class="badge {}">{} <{}></span>"#,
        category.badge_class(),
        category,
        electiveness
    ))
}

/// 資料夾名稱：`code_name`，code 在第一個 `~` 處截斷
///
/// ```
/// use course_gen::core::derive::derive_folder_name;
///
/// assert_eq!(
///     derive_folder_name("08305009~010", "Data Structures"),
///     "08305009_Data Structures"
/// );
/// ```
pub fn derive_folder_name(code: &str, name: &str) -> String {
    let code = code
        .split_once(CODE_RANGE_SEPARATOR)
        .map_or(code, |(head, _)| head);
    format!("{}_{}", code, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CourseGenError;

    #[test]
    fn test_folder_name_truncates_range_suffix() {
        assert_eq!(
            derive_folder_name("08305009~010", "Data Structures"),
            "08305009_Data Structures"
        );
        assert_eq!(derive_folder_name("A~", "Intro"), "A_Intro");
    }

    #[test]
    fn test_folder_name_without_separator() {
        assert_eq!(derive_folder_name("08304135", "Programming"), "08304135_Programming");
        assert_eq!(derive_folder_name("", "Programming"), "_Programming");
    }

    #[test]
    fn test_folder_name_keeps_only_first_segment() {
        assert_eq!(derive_folder_name("0830~5009~010", "OS"), "0830_OS");
        assert_eq!(derive_folder_name("~010", "OS"), "_OS");
    }

    #[test]
    fn test_folder_name_separator_in_name_is_kept() {
        assert_eq!(derive_folder_name("0830", "A~B"), "0830_A~B");
    }

    #[test]
    fn test_course_tag_for_each_combination() {
        let tag = derive_course_tag("computer-science", "mandatory").unwrap();
        assert!(tag.contains("cs-badge"));
        assert!(tag.contains("mandatory"));

        let tag = derive_course_tag("computer-science", "elective").unwrap();
        assert!(tag.contains("cs-badge"));
        assert!(tag.contains("<elective>"));

        let tag = derive_course_tag("cyber-security", "mandatory").unwrap();
        assert_eq!(
            tag,
            r#"<span class="badge is-badge">cyber-security <mandatory></span>"#
        );

        let tag = derive_course_tag("cyber-security", "elective").unwrap();
        assert!(tag.contains("is-badge"));
        assert!(!tag.contains("cs-badge"));
    }

    #[test]
    fn test_course_tag_rejects_unknown_category() {
        let err = derive_course_tag("mathematics", "mandatory").unwrap_err();
        assert!(matches!(err, CourseGenError::InvalidCategory { value } if value == "mathematics"));
    }

    #[test]
    fn test_course_tag_rejects_unknown_electiveness() {
        let err = derive_course_tag("cyber-security", "optional").unwrap_err();
        assert!(matches!(err, CourseGenError::InvalidElectiveness { value } if value == "optional"));
    }

    #[test]
    fn test_course_tag_checks_category_first() {
        let err = derive_course_tag("bogus", "bogus").unwrap_err();
        assert!(matches!(err, CourseGenError::InvalidCategory { .. }));
    }
}
