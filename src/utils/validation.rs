use crate::utils::error::{FixtureError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FixtureError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("destination", "src/app/page.tsx").is_ok());
        assert!(validate_path("destination", "").is_err());
        assert!(validate_path("destination", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("page.tsx".to_string());
        let missing: Option<String> = None;

        assert_eq!(
            validate_required_field("destination", &present).unwrap(),
            "page.tsx"
        );
        assert!(matches!(
            validate_required_field("destination", &missing),
            Err(FixtureError::MissingConfigError { .. })
        ));
    }
}
