use crate::utils::error::{CourseGenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CourseGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CourseGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 單純檔名，不可包含路徑分隔字元
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(CourseGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Must be a plain file name without path separators".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CourseGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("paths.output", "outputs").is_ok());
        assert!(validate_path("paths.output", "").is_err());
        assert!(validate_path("paths.output", "out\0puts").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("paths.document", "index.md").is_ok());
        assert!(validate_file_name("paths.document", "docs/index.md").is_err());
        assert!(validate_file_name("paths.document", "..").is_err());
        assert!(validate_file_name("paths.document", "").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("navigation.computer_prefix", "1_course_computer").is_ok());
        assert!(validate_non_empty_string("navigation.computer_prefix", "   ").is_err());
    }
}
